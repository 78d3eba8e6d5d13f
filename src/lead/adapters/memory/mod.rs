//! In-memory lead storage for tests and single-process deployments.

mod lead;

pub use lead::InMemoryLeadRepository;
