//! Unvalidated lead input and the validated field set built from it.

use super::{LeadField, LeadStage, LeadValidationError};
use crate::caller::UserRef;
use serde::{Deserialize, Serialize};

/// Caller-supplied lead attributes for create and full-record update.
///
/// Optional attributes keep the distinction between "absent" (`None`) and an
/// explicit empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadInput {
    first_name: String,
    last_name: String,
    mobile: String,
    country: String,
    state: String,
    city: String,
    lead_stage: Option<String>,
    salutation: Option<String>,
    email: Option<String>,
    country_code: Option<String>,
    whatsapp: Option<String>,
    lead_type: Option<String>,
    preferred_language: Option<String>,
    company_name: Option<String>,
    assigned_to: Option<UserRef>,
}

impl LeadInput {
    /// Creates input with the required contact and location attributes.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mobile: impl Into<String>,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            mobile: mobile.into(),
            country: country.into(),
            state: state.into(),
            city: city.into(),
            lead_stage: None,
            salutation: None,
            email: None,
            country_code: None,
            whatsapp: None,
            lead_type: None,
            preferred_language: None,
            company_name: None,
            assigned_to: None,
        }
    }

    /// Sets the pipeline stage by name. Unset means [`LeadStage::Lead`].
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.lead_stage = Some(stage.into());
        self
    }

    /// Sets the salutation.
    #[must_use]
    pub fn with_salutation(mut self, salutation: impl Into<String>) -> Self {
        self.salutation = Some(salutation.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the dialling prefix for the mobile number.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Sets the WhatsApp number.
    #[must_use]
    pub fn with_whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = Some(whatsapp.into());
        self
    }

    /// Sets the lead type (buyer, seller, owner, tenant, ...).
    #[must_use]
    pub fn with_lead_type(mut self, lead_type: impl Into<String>) -> Self {
        self.lead_type = Some(lead_type.into());
        self
    }

    /// Sets the preferred language.
    #[must_use]
    pub fn with_preferred_language(mut self, language: impl Into<String>) -> Self {
        self.preferred_language = Some(language.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Assigns the lead to a user.
    #[must_use]
    pub fn with_assigned_to(mut self, user: UserRef) -> Self {
        self.assigned_to = Some(user);
        self
    }

    /// Checks required attributes and resolves the stage.
    ///
    /// # Errors
    ///
    /// Returns [`LeadValidationError`] naming every required attribute that
    /// is blank, plus `leadStage` when the stage name is blank or unknown.
    pub fn validate(self) -> Result<LeadFields, LeadValidationError> {
        let required = [
            (LeadField::FirstName, &self.first_name),
            (LeadField::LastName, &self.last_name),
            (LeadField::Mobile, &self.mobile),
            (LeadField::Country, &self.country),
            (LeadField::State, &self.state),
            (LeadField::City, &self.city),
        ];
        let mut invalid: Vec<LeadField> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        let stage = match self.lead_stage.as_deref() {
            None => Some(LeadStage::default()),
            Some(name) => LeadStage::try_from(name).ok(),
        };
        if stage.is_none() {
            invalid.push(LeadField::LeadStage);
        }

        match stage {
            Some(lead_stage) if invalid.is_empty() => Ok(LeadFields {
                first_name: self.first_name,
                last_name: self.last_name,
                mobile: self.mobile,
                country: self.country,
                state: self.state,
                city: self.city,
                lead_stage,
                salutation: self.salutation,
                email: self.email,
                country_code: self.country_code,
                whatsapp: self.whatsapp,
                lead_type: self.lead_type,
                preferred_language: self.preferred_language,
                company_name: self.company_name,
                assigned_to: self.assigned_to,
            }),
            _ => Err(LeadValidationError::new(invalid)),
        }
    }
}

/// Validated mutable attributes of a lead.
///
/// Only [`LeadInput::validate`] and persistence reconstruction produce this
/// type, so holding one means the required-field invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFields {
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) mobile: String,
    pub(super) country: String,
    pub(super) state: String,
    pub(super) city: String,
    pub(super) lead_stage: LeadStage,
    pub(super) salutation: Option<String>,
    pub(super) email: Option<String>,
    pub(super) country_code: Option<String>,
    pub(super) whatsapp: Option<String>,
    pub(super) lead_type: Option<String>,
    pub(super) preferred_language: Option<String>,
    pub(super) company_name: Option<String>,
    pub(super) assigned_to: Option<UserRef>,
}
