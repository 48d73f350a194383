//! I/O operations module
//!
//! Open helpers for the two benchmark phases and the pattern buffer.

pub mod buffer;

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::{Result, SeqIoError};

pub use buffer::{fill_pattern, pattern_buffer};

/// Open the destination for the write phase, creating or truncating it.
pub fn open_write(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| SeqIoError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Open the destination for the read phase.
pub fn open_read(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SeqIoError::Read {
        path: path.to_path_buf(),
        source,
    })
}
