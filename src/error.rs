//! Error types for stripjpg.
//!
//! [`JpegError`] classifies why a marker stream could not be rewritten.
//! [`Error`] wraps it together with the file and argument failures that the
//! command-line front end reports per file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stripjpg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures of the marker-stream rewriter.
///
/// Offsets are byte positions in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JpegError {
    /// Too short, or the first two bytes are not `FF D8`.
    #[error("not a JPEG file")]
    NotAJpeg,
    /// A marker, length field, segment body or scan terminator was cut off.
    #[error("unexpected end of JPEG file at offset {offset}")]
    TruncatedFile { offset: usize },
    /// A marker was expected but something else was found.
    #[error("invalid marker sync at offset {offset} (found 0x{found:02X})")]
    InvalidMarkerSync { offset: usize, found: u8 },
    /// A segment length field smaller than the two bytes it occupies.
    #[error("invalid segment length {length} at offset {offset}")]
    InvalidSegmentLength { offset: usize, length: u16 },
}

/// Errors that can occur while processing a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file contents could not be rewritten.
    #[error(transparent)]
    Jpeg(#[from] JpegError),
    /// File not found.
    #[error("file not found")]
    NotFound { path: PathBuf },
    /// Permission denied.
    #[error("permission denied: '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    /// I/O error with optional path context.
    #[error("I/O error{}: {source}", path_context(.path))]
    Io {
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },
    /// Command-line parsing error.
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io {
            source: err,
            path: None,
        }
    }
}

fn path_context(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" for '{}'", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Create an I/O error with path context.
    pub fn io_with_path(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io {
                source: err,
                path: Some(path),
            },
        }
    }
}
