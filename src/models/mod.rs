//! Data models module
//!
//! Timing summaries and the run report.

pub mod result;

// Re-export commonly used types
pub use result::{throughput_mbps, RunReport, TransferSummary};
