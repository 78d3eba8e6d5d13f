//! In-memory activity storage.

mod activity;

pub use activity::InMemoryActivityRepository;
