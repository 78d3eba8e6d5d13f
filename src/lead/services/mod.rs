//! Application services for lead records.

mod records;

pub use records::{LeadRecordError, LeadRecordResult, LeadRecordService};
