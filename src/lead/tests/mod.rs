//! Unit tests for the lead record store.
