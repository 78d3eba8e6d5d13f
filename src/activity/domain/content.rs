//! Per-kind activity payloads.
//!
//! Each activity kind has its own payload schema. [`ActivityContent`] keys the
//! payload by kind so one kind's schema is never read as another's.

use super::{ActivityDomainError, ParseActivityKindError};
use crate::caller::UserRef;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Activity kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    /// Free-text note.
    Note,
    /// Phone call.
    Call,
    /// Text message.
    Sms,
    /// WhatsApp message.
    Whatsapp,
    /// Email.
    Email,
    /// Scheduled follow-up.
    Task,
}

impl ActivityKind {
    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "NOTE",
            Self::Call => "CALL",
            Self::Sms => "SMS",
            Self::Whatsapp => "WHATSAPP",
            Self::Email => "EMAIL",
            Self::Task => "TASK",
        }
    }
}

impl TryFrom<&str> for ActivityKind {
    type Error = ParseActivityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NOTE" => Ok(Self::Note),
            "CALL" => Ok(Self::Call),
            "SMS" => Ok(Self::Sms),
            "WHATSAPP" => Ok(Self::Whatsapp),
            "EMAIL" => Ok(Self::Email),
            "TASK" => Ok(Self::Task),
            _ => Err(ParseActivityKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a `NOTE` activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    /// Note body.
    pub text: String,
}

/// Payload of a `CALL` activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContent {
    /// Dialled number, digits only.
    pub number: String,
    /// Call length when the dialler reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,
}

/// Payload of `SMS` and `WHATSAPP` activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Recipient number.
    pub to: String,
    /// Message body.
    pub message: String,
}

/// Payload of an `EMAIL` activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    /// Recipient address; leads without an email still log the attempt.
    pub to: Option<String>,
    /// Subject line; must not be blank.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Completion state of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TaskCompletion {
    /// Still open.
    #[default]
    Pending,
    /// Marked done.
    Done {
        /// When the task was marked done.
        completed_at: DateTime<Utc>,
        /// Who marked it done, when a user did.
        completed_by: Option<UserRef>,
    },
}

/// Payload of a `TASK` activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContent {
    /// Due time.
    pub when: DateTime<Utc>,
    /// What to do.
    #[serde(default)]
    pub note: String,
    /// Completion state.
    #[serde(default)]
    pub completion: TaskCompletion,
}

impl TaskContent {
    /// Creates a pending task due at `when`.
    #[must_use]
    pub fn new(when: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self {
            when,
            note: note.into(),
            completion: TaskCompletion::Pending,
        }
    }

    /// Returns `true` once the task is marked done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.completion, TaskCompletion::Done { .. })
    }
}

/// Activity payload keyed by kind.
///
/// # Serialisation
///
/// The kind and payload serialise as sibling `type` and `content` fields:
///
/// ```json
/// { "type": "NOTE", "content": { "text": "Follow-up tomorrow" } }
/// { "type": "TASK", "content": { "when": "2025-03-01T10:00:00Z", "note": "Call back" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityContent {
    /// Free-text note.
    Note(NoteContent),
    /// Phone call.
    Call(CallContent),
    /// Text message.
    Sms(MessageContent),
    /// WhatsApp message.
    Whatsapp(MessageContent),
    /// Email.
    Email(EmailContent),
    /// Scheduled follow-up.
    Task(TaskContent),
}

impl ActivityContent {
    /// Builds a note payload.
    #[must_use]
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note(NoteContent { text: text.into() })
    }

    /// Builds a pending task payload.
    #[must_use]
    pub fn task(when: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self::Task(TaskContent::new(when, note))
    }

    /// Decodes an untyped payload against the schema of `kind`.
    ///
    /// Task payloads take `when` as an RFC 3339 string and an optional
    /// `note`; a supplied completion state is ignored, new tasks always start
    /// pending.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::MissingTaskDue`] or
    /// [`ActivityDomainError::InvalidTaskDue`] for bad task timestamps, and
    /// [`ActivityDomainError::InvalidContent`] when any other payload does not
    /// match its kind's schema.
    pub fn from_payload(kind: ActivityKind, payload: &Value) -> Result<Self, ActivityDomainError> {
        let content = match kind {
            ActivityKind::Note => decode(kind, payload).map(Self::Note),
            ActivityKind::Call => decode(kind, payload).map(Self::Call),
            ActivityKind::Sms => decode(kind, payload).map(Self::Sms),
            ActivityKind::Whatsapp => decode(kind, payload).map(Self::Whatsapp),
            ActivityKind::Email => decode(kind, payload).map(Self::Email),
            ActivityKind::Task => decode_task(payload).map(Self::Task),
        }?;
        content.validate()?;
        Ok(content)
    }

    /// Checks rules the payload schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidContent`] for an email with a
    /// blank subject.
    pub fn validate(&self) -> Result<(), ActivityDomainError> {
        match self {
            Self::Email(email) if email.subject.trim().is_empty() => {
                Err(ActivityDomainError::InvalidContent {
                    kind: ActivityKind::Email,
                    reason: "subject is required".to_owned(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns the kind of this payload.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Note(_) => ActivityKind::Note,
            Self::Call(_) => ActivityKind::Call,
            Self::Sms(_) => ActivityKind::Sms,
            Self::Whatsapp(_) => ActivityKind::Whatsapp,
            Self::Email(_) => ActivityKind::Email,
            Self::Task(_) => ActivityKind::Task,
        }
    }

    /// Returns the task payload when this is a task.
    #[must_use]
    pub const fn as_task(&self) -> Option<&TaskContent> {
        match self {
            Self::Task(task) => Some(task),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(
    kind: ActivityKind,
    payload: &Value,
) -> Result<T, ActivityDomainError> {
    serde_json::from_value(payload.clone()).map_err(|err| ActivityDomainError::InvalidContent {
        kind,
        reason: err.to_string(),
    })
}

fn decode_task(payload: &Value) -> Result<TaskContent, ActivityDomainError> {
    let when = match payload.get("when") {
        None | Some(Value::Null) => return Err(ActivityDomainError::MissingTaskDue),
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
            .map_err(|_| ActivityDomainError::InvalidTaskDue(raw.clone()))?
            .with_timezone(&Utc),
        Some(other) => return Err(ActivityDomainError::InvalidTaskDue(other.to_string())),
    };
    let note = match payload.get("note") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(note)) => note.clone(),
        Some(other) => {
            return Err(ActivityDomainError::InvalidContent {
                kind: ActivityKind::Task,
                reason: format!("note must be a string, found {other}"),
            });
        }
    };
    Ok(TaskContent::new(when, note))
}
