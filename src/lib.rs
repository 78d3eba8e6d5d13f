//! Leadbook: lead and activity domain core for a sales CRM.
//!
//! The crate owns the lead record store, the per-lead activity log with task
//! due-status derivation, and read-only dashboard and export reports.
//! Transport, authentication and outbound messaging live in the callers.
//!
//! # Architecture
//!
//! Leadbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`lead`]: Lead records and pipeline stages
//! - [`activity`]: Activity log, task status and views
//! - [`reporting`]: Dashboard summary and CSV export
//! - [`settings`]: Layered runtime settings
//! - [`caller`]: Acting-user context

pub mod activity;
pub mod caller;
pub mod lead;
pub mod reporting;
pub mod settings;
