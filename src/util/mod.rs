//! Utility functions module

pub mod units;

// Re-export commonly used functions
pub use units::{unit_label, unit_multiplier, REPORT_MB};
