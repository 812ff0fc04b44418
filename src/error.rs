//! Errors raised while reading a definition file.
//!
//! Invalid headers and sections are not errors; they are reported as
//! findings by the validation engine.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for rejected command-line arguments (`EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;

/// Exit status used when the definition file cannot be read (`EX_NOINPUT`).
pub const EXIT_LOAD_FAILURE: i32 = 66;

/// Exit status when `--dump` output cannot be written (`EX_IOERR`).
pub const EXIT_OUTPUT_FAILURE: i32 = 74;

/// The definition file could not be opened or read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
