//! Unit tests for the activity log.
