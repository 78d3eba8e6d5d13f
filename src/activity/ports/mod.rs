//! Port contracts for the activity log.

pub mod repository;

pub use repository::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult};
