//! Benchmark engine module
//!
//! Contains the timed sequential write/read loop and the destination
//! cleanup step.

pub mod sequential;

// Re-export commonly used types
pub use sequential::{remove_destination, SequentialBenchmark};
