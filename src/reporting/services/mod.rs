//! Application services for reports.

mod dashboard;

pub use dashboard::{ReportingError, ReportingResult, ReportingService};
