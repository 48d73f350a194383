//! Run configuration
//!
//! Holds the parsed benchmark parameters. Immutable once built.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::util::units::{unit_label, unit_multiplier};
use crate::{DEFAULT_COUNT, DEFAULT_ITERATIONS, DEFAULT_UNIT};

/// Parameters for one benchmark run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Destination file the benchmark writes to and reads back from
    pub destination: PathBuf,
    /// Measurement unit selector (see [`crate::util::units`])
    pub unit: char,
    /// Number of measurement units written per pass
    pub count: i64,
    /// Number of write/read iterations
    pub iterations: i64,
    /// Delete the destination file after the run
    pub remove_file: bool,
}

impl RunConfig {
    /// Create a configuration for `destination` with default values
    /// (1 GiB, 4 iterations, keep the file).
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            unit: DEFAULT_UNIT,
            count: DEFAULT_COUNT,
            iterations: DEFAULT_ITERATIONS,
            remove_file: false,
        }
    }

    /// Build a configuration from parsed CLI arguments.
    ///
    /// Returns `None` when no destination was given; the caller prints
    /// usage and exits cleanly in that case.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let destination = cli.destination.clone()?;
        Some(Self {
            destination,
            unit: cli.unit,
            count: cli.count,
            iterations: cli.iterations,
            remove_file: cli.remove,
        })
    }

    /// Set the measurement unit
    pub fn with_unit(mut self, unit: char) -> Self {
        self.unit = unit;
        self
    }

    /// Set the unit count per pass
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set whether to remove the destination file afterwards
    pub fn with_remove_file(mut self, remove: bool) -> Self {
        self.remove_file = remove;
        self
    }

    /// Total number of bytes transferred per pass.
    ///
    /// Counts are accepted unvalidated, so a negative or zero count clamps
    /// to an empty buffer: the run is degenerate but defined.
    pub fn total_bytes(&self) -> u64 {
        let total = (unit_multiplier(self.unit) as i64).saturating_mul(self.count);
        if total < 0 {
            0
        } else {
            total as u64
        }
    }

    /// One-line description of the run for the log.
    pub fn describe(&self) -> String {
        format!(
            "write/read of {}{} or {} bytes in total, {} times to destination {}",
            self.count,
            unit_label(self.unit),
            self.total_bytes(),
            self.iterations,
            self.destination.display()
        )
    }
}
