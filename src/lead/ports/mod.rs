//! Port contracts for lead storage.
//!
//! Ports define infrastructure-agnostic interfaces used by lead services.

pub mod repository;

pub use repository::{LeadRepository, LeadRepositoryError, LeadRepositoryResult};
