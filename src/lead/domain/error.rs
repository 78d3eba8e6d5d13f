//! Error types for lead validation and parsing.

use std::fmt;
use thiserror::Error;

/// Lead attributes that are checked on create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    /// `firstName`.
    FirstName,
    /// `lastName`.
    LastName,
    /// `mobile`.
    Mobile,
    /// `country`.
    Country,
    /// `state`.
    State,
    /// `city`.
    City,
    /// `leadStage`.
    LeadStage,
}

impl LeadField {
    /// Returns the wire attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Mobile => "mobile",
            Self::Country => "country",
            Self::State => "state",
            Self::City => "city",
            Self::LeadStage => "leadStage",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead input was rejected; lists every offending field in declaration order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid lead fields: {}", join_fields(.fields))]
pub struct LeadValidationError {
    fields: Vec<LeadField>,
}

impl LeadValidationError {
    /// Creates an error for the given fields.
    #[must_use]
    pub const fn new(fields: Vec<LeadField>) -> Self {
        Self { fields }
    }

    /// Returns the offending fields.
    #[must_use]
    pub fn fields(&self) -> &[LeadField] {
        &self.fields
    }

    /// Returns the offending wire attribute names.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.as_str()).collect()
    }
}

fn join_fields(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned while parsing a lead stage name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead stage: {0}")]
pub struct ParseLeadStageError(pub String);
