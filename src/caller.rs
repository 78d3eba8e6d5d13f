//! Explicit acting-user context threaded through every mutating call.
//!
//! Callers are resolved by the transport layer (session, token, CLI flag) and
//! passed into services directly; nothing in the crate looks the current user
//! up from ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a user managed outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weak reference to a user: copied into records, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// User identifier.
    pub id: UserId,
    /// Display name at the time the reference was taken.
    pub name: String,
    /// Contact email at the time the reference was taken.
    pub email: String,
}

impl UserRef {
    /// Creates a user reference.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The party on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// A signed-in user.
    User(UserRef),
    /// An automated process with no user attached (imports, schedulers).
    System,
}

impl Caller {
    /// Returns the acting user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserRef> {
        match self {
            Self::User(user) => Some(user),
            Self::System => None,
        }
    }
}

impl From<UserRef> for Caller {
    fn from(user: UserRef) -> Self {
        Self::User(user)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(user) => write!(f, "user:{}", user.id),
            Self::System => f.write_str("system"),
        }
    }
}
