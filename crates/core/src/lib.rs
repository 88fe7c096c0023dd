//! Ride Telemetry Core Library
//!
//! Quantity value types shared by the ride-recording analysis pipeline.
//! Parsers construct these from raw sensor samples and the analysis layers
//! compose them with plain arithmetic. A missing sample is carried as a NaN
//! unknown sentinel rather than an error, so gaps in a recording flow
//! through derived computations without special-casing at every call site.

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Acceleration, Distance, Speed};
