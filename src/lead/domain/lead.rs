//! Lead aggregate root.

use super::{LeadFields, LeadId, LeadStage};
use crate::caller::UserRef;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A prospective customer record.
///
/// `id` and `created_at` are fixed when the lead is created; every other
/// attribute is replaced as a whole by [`Lead::replace_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    id: LeadId,
    #[serde(flatten)]
    fields: LeadFields,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Creates a new lead from validated fields.
    #[must_use]
    pub fn new(fields: LeadFields, clock: &impl Clock) -> Self {
        Self {
            id: LeadId::new(),
            fields,
            created_at: clock.utc(),
        }
    }

    /// Replaces all mutable attributes, keeping identity and creation time.
    pub fn replace_fields(&mut self, fields: LeadFields) {
        self.fields = fields;
    }

    /// Returns the lead identifier.
    #[must_use]
    pub const fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the validated mutable attributes.
    #[must_use]
    pub const fn fields(&self) -> &LeadFields {
        &self.fields
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.fields.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.fields.last_name
    }

    /// Returns the mobile number.
    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.fields.mobile
    }

    /// Returns the country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.fields.country
    }

    /// Returns the state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.fields.state
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.fields.city
    }

    /// Returns the pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> LeadStage {
        self.fields.lead_stage
    }

    /// Returns the salutation, if any.
    #[must_use]
    pub fn salutation(&self) -> Option<&str> {
        self.fields.salutation.as_deref()
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.fields.email.as_deref()
    }

    /// Returns the dialling prefix, if any.
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.fields.country_code.as_deref()
    }

    /// Returns the WhatsApp number, if any.
    #[must_use]
    pub fn whatsapp(&self) -> Option<&str> {
        self.fields.whatsapp.as_deref()
    }

    /// Returns the lead type, if any.
    #[must_use]
    pub fn lead_type(&self) -> Option<&str> {
        self.fields.lead_type.as_deref()
    }

    /// Returns the preferred language, if any.
    #[must_use]
    pub fn preferred_language(&self) -> Option<&str> {
        self.fields.preferred_language.as_deref()
    }

    /// Returns the company name, if any.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.fields.company_name.as_deref()
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&UserRef> {
        self.fields.assigned_to.as_ref()
    }

    /// Returns the name shown in lists and exports.
    ///
    /// A present, non-blank salutation is prefixed with a single space.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.salutation().filter(|s| !s.trim().is_empty()) {
            Some(salutation) => format!(
                "{salutation} {} {}",
                self.fields.first_name, self.fields.last_name
            ),
            None => format!("{} {}", self.fields.first_name, self.fields.last_name),
        }
    }
}
