//! Lead record store.
//!
//! Leads are prospective customers tracked through the sales pipeline. The
//! module follows the crate's hexagonal layout:
//!
//! - Domain types and validation rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
