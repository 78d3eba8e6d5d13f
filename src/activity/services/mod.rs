//! Application services for the activity log.

mod journal;

pub use journal::{ActivityLogError, ActivityLogResult, ActivityLogService, AppendActivityRequest};
