//! Unit tests for reports.
