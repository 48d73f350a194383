//! seqio - sequential disk throughput benchmark
//!
//! Writes a pattern-filled buffer to a destination file and reads it back,
//! timing each pass and reporting min/max throughput in MB/s.

use std::fmt;
use std::path::PathBuf;

// Public re-exports
pub mod bench;
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SeqIoError {
    /// Opening or writing the destination file failed
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Opening or reading the destination file back failed
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Any other I/O failure
    Io(std::io::Error),
}

impl SeqIoError {
    /// Process exit status for this error: write failures exit with 1,
    /// read failures with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            SeqIoError::Write { .. } => 1,
            SeqIoError::Read { .. } => 2,
            SeqIoError::Io(_) => 1,
        }
    }
}

impl fmt::Display for SeqIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqIoError::Write { path, source } => {
                write!(f, "could not write {}, aborting: {}", path.display(), source)
            }
            SeqIoError::Read { path, source } => {
                write!(f, "could not read {}, aborting: {}", path.display(), source)
            }
            SeqIoError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SeqIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqIoError::Write { source, .. } => Some(source),
            SeqIoError::Read { source, .. } => Some(source),
            SeqIoError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SeqIoError {
    fn from(err: std::io::Error) -> Self {
        SeqIoError::Io(err)
    }
}

/// Result type alias for seqio operations
pub type Result<T> = std::result::Result<T, SeqIoError>;

// Common constants
pub const APP_NAME: &str = "seqio";
pub const DEFAULT_UNIT: char = 'G';
pub const DEFAULT_COUNT: i64 = 1;
pub const DEFAULT_ITERATIONS: i64 = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let write = SeqIoError::Write {
            path: PathBuf::from("/tmp/x"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let read = SeqIoError::Read {
            path: PathBuf::from("/tmp/x"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(write.exit_code(), 1);
        assert_eq!(read.exit_code(), 2);
        assert_eq!(
            SeqIoError::Io(std::io::Error::from(std::io::ErrorKind::Other)).exit_code(),
            1
        );
    }

    #[test]
    fn test_display_names_the_path() {
        let err = SeqIoError::Write {
            path: PathBuf::from("/tmp/bench.dat"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/bench.dat"));
        assert!(msg.contains("write"));
    }
}
