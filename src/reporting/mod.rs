//! Read-only reporting over leads and activities.
//!
//! Covers the dashboard summary and the lead CSV export. Reports read through
//! the lead and activity ports and never write.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
