//! Activity log for leads.
//!
//! Activities are timestamped interactions (notes, calls, messages, email)
//! and scheduled tasks recorded against a lead. Records are append-only apart
//! from task completion. Task due status is never stored; it is derived from
//! the task's due time and the current clock on every read.
//!
//! - Domain types, status rules and views in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
