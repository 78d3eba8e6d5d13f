//! Report models and builders.

mod export;
mod summary;

pub use export::{EXPORT_FILE_NAME, EXPORT_HEADERS, ExportError, leads_to_csv};
pub use summary::{DashboardSummary, StageCount};
