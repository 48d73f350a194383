//! Sequential benchmark loop
//!
//! Runs the timed write/read iterations against the destination file. Each
//! pass transfers the whole pattern buffer in a single call; only that call
//! is timed, on the monotonic clock, and recorded at millisecond
//! resolution. The buffer is allocated and filled up front so its cost
//! stays out of the measurements.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::RunConfig;
use crate::io::{open_read, open_write, pattern_buffer};
use crate::models::RunReport;
use crate::{Result, SeqIoError};

/// Sequential benchmark executor
pub struct SequentialBenchmark {
    config: RunConfig,
    buffer: Vec<u8>,
}

impl SequentialBenchmark {
    /// Allocate and fill the transfer buffer for the configured size.
    pub fn new(config: RunConfig) -> Self {
        let total = config.total_bytes() as usize;
        info!("allocating {} byte buffer", total);
        let buffer = pattern_buffer(total);
        info!("buffer filled");

        Self { config, buffer }
    }

    /// Run the configured number of write/read iterations.
    ///
    /// A non-positive iteration count runs an empty loop; the resulting
    /// report carries no samples.
    pub fn run(&mut self) -> Result<RunReport> {
        let iterations = self.config.iterations;
        let mut write_samples = Vec::new();
        let mut read_samples = Vec::new();

        for iteration in 0..iterations {
            info!("run {} write", iteration + 1);
            let elapsed = self.timed_write()?;
            info!("run {} write took {} ms", iteration + 1, elapsed.as_millis());
            write_samples.push(elapsed);

            info!("run {} read", iteration + 1);
            let elapsed = self.timed_read()?;
            info!("run {} read took {} ms", iteration + 1, elapsed.as_millis());
            read_samples.push(elapsed);
        }

        Ok(RunReport {
            total_bytes: self.buffer.len() as u64,
            write_samples,
            read_samples,
        })
    }

    /// One write pass over the whole buffer.
    ///
    /// The handle drops at the end of the scope, so the file is closed
    /// before the read phase opens it.
    fn timed_write(&self) -> Result<Duration> {
        let path = &self.config.destination;
        let mut file = open_write(path)?;

        let begin = Instant::now();
        file.write_all(&self.buffer)
            .map_err(|source| SeqIoError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(begin.elapsed())
    }

    /// One read pass, back into the transfer buffer.
    fn timed_read(&mut self) -> Result<Duration> {
        let path = &self.config.destination;
        let mut file = open_read(path)?;

        let begin = Instant::now();
        file.read_exact(&mut self.buffer)
            .map_err(|source| SeqIoError::Read {
                path: path.clone(),
                source,
            })?;
        Ok(begin.elapsed())
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

/// Delete the destination file after a run.
///
/// Failure is logged, never fatal; the file may legitimately be missing
/// after an aborted run.
pub fn remove_destination(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => info!("removed {}", path.display()),
        Err(err) => warn!("could not remove {}: {}", path.display(), err),
    }
}
