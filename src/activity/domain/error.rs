//! Error types for activity validation.

use super::{ActivityId, ActivityKind};
use thiserror::Error;

/// Errors returned while building or changing activity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// A task payload has no `when` value.
    #[error("task content requires a `when` timestamp")]
    MissingTaskDue,

    /// A task payload carries a `when` value that is not an RFC 3339 timestamp.
    #[error("invalid task due timestamp: {0}")]
    InvalidTaskDue(String),

    /// The payload does not match the schema of its activity kind.
    #[error("invalid {kind} content: {reason}")]
    InvalidContent {
        /// Declared activity kind.
        kind: ActivityKind,
        /// Decoder message.
        reason: String,
    },

    /// A task-only operation was applied to another kind of activity.
    #[error("activity {0} is not a task")]
    NotATask(ActivityId),

    /// The task was already marked done.
    #[error("task {0} is already completed")]
    TaskAlreadyCompleted(ActivityId),
}

/// Error returned while parsing an activity kind name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity type: {0}")]
pub struct ParseActivityKindError(pub String);
