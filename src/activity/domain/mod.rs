//! Domain model for the activity log.

mod activity;
mod content;
mod error;
mod ids;
mod status;
mod view;

pub use activity::Activity;
pub use content::{
    ActivityContent, ActivityKind, CallContent, EmailContent, MessageContent, NoteContent,
    TaskCompletion, TaskContent,
};
pub use error::{ActivityDomainError, ParseActivityKindError};
pub use ids::ActivityId;
pub use status::{DEFAULT_DUE_TODAY_WINDOW_HOURS, TaskStatus, TaskStatusPolicy, derive_task_status};
pub use view::{ScheduledTask, activity_history, task_schedule};
