//! Domain model for lead records.
//!
//! Validation happens before a record is built, so a [`Lead`] value always
//! satisfies the required-field and stage invariants.

mod error;
mod ids;
mod input;
mod lead;
mod stage;

pub use error::{LeadField, LeadValidationError, ParseLeadStageError};
pub use ids::LeadId;
pub use input::{LeadFields, LeadInput};
pub use lead::Lead;
pub use stage::LeadStage;
