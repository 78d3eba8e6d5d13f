//! Adapter implementations for lead ports.

pub mod memory;
