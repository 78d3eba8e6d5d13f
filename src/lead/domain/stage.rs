//! Sales pipeline stages.

use super::ParseLeadStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline position of a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadStage {
    /// Newly captured, not yet qualified.
    #[default]
    Lead,
    /// Qualified and being worked.
    Prospect,
    /// Converted.
    Customer,
    /// Qualified out.
    Disqualified,
    /// Bogus or unreachable record.
    Invalid,
}

impl LeadStage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Lead,
        Self::Prospect,
        Self::Customer,
        Self::Disqualified,
        Self::Invalid,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Prospect => "Prospect",
            Self::Customer => "Customer",
            Self::Disqualified => "Disqualified",
            Self::Invalid => "Invalid",
        }
    }
}

impl TryFrom<&str> for LeadStage {
    type Error = ParseLeadStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "lead" => Ok(Self::Lead),
            "prospect" => Ok(Self::Prospect),
            "customer" => Ok(Self::Customer),
            "disqualified" => Ok(Self::Disqualified),
            "invalid" => Ok(Self::Invalid),
            _ => Err(ParseLeadStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for LeadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
