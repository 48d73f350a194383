//! Benchmark result data models
//!
//! Aggregates the per-iteration timings into min/max summaries and renders
//! the final throughput report.

use std::fmt;
use std::time::Duration;

use crate::util::units::REPORT_MB;

/// Min/max elapsed milliseconds over the samples of one transfer direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    /// Shortest observed pass
    pub min_ms: u64,
    /// Longest observed pass
    pub max_ms: u64,
}

impl TransferSummary {
    /// Aggregate a sample sequence by sentinel-initialized comparison scan.
    ///
    /// Returns `None` when no iterations ran.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut min_ms = u64::MAX;
        let mut max_ms = u64::MIN;
        for sample in samples {
            let ms = sample.as_millis() as u64;
            if ms < min_ms {
                min_ms = ms;
            }
            if ms > max_ms {
                max_ms = ms;
            }
        }

        Some(Self { min_ms, max_ms })
    }

    /// Slowest observed throughput in MB/s.
    ///
    /// Divides by the *max* elapsed time: the minimum speed corresponds to
    /// the longest pass.
    pub fn min_throughput_mbps(&self, total_bytes: u64) -> f64 {
        throughput_mbps(total_bytes, self.max_ms)
    }

    /// Fastest observed throughput in MB/s, from the *min* elapsed time.
    pub fn max_throughput_mbps(&self, total_bytes: u64) -> f64 {
        throughput_mbps(total_bytes, self.min_ms)
    }
}

/// Throughput in MB/s using the fixed 1,000,000-byte megabyte.
///
/// A pass that completes within the clock resolution (0 ms) reports
/// infinite throughput, which keeps min <= max in the summary.
pub fn throughput_mbps(total_bytes: u64, elapsed_ms: u64) -> f64 {
    let total_mb = total_bytes / REPORT_MB;
    if elapsed_ms == 0 {
        return f64::INFINITY;
    }
    (total_mb * 1000) as f64 / elapsed_ms as f64
}

/// Complete result of a benchmark run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Bytes transferred per pass
    pub total_bytes: u64,
    /// Per-iteration write timings
    pub write_samples: Vec<Duration>,
    /// Per-iteration read timings
    pub read_samples: Vec<Duration>,
}

impl RunReport {
    pub fn write_summary(&self) -> Option<TransferSummary> {
        TransferSummary::from_samples(&self.write_samples)
    }

    pub fn read_summary(&self) -> Option<TransferSummary> {
        TransferSummary::from_samples(&self.read_samples)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.write_summary(), self.read_summary()) {
            (Some(write), Some(read)) => {
                writeln!(
                    f,
                    "WRITE: min {:.0} MB/s max {:.0} MB/s",
                    write.min_throughput_mbps(self.total_bytes),
                    write.max_throughput_mbps(self.total_bytes)
                )?;
                write!(
                    f,
                    "READ:  min {:.0} MB/s max {:.0} MB/s",
                    read.min_throughput_mbps(self.total_bytes),
                    read.max_throughput_mbps(self.total_bytes)
                )
            }
            _ => write!(f, "no samples collected"),
        }
    }
}
