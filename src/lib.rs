//! stripjpg - strip metadata from JPEG files
//!
//! Removes ICC profiles, EXIF, XMP, IPTC, comments and thumbnails from JPEG
//! files by walking the marker stream once and keeping only the segments
//! needed to decode the image. Pixel data is never decoded or re-encoded.
//!
//! # Example
//!
//! ```
//! use stripjpg::jpeg::{strip, StripOptions};
//!
//! let jpeg = vec![
//!     0xFF, 0xD8, // SOI
//!     0xFF, 0xFE, 0x00, 0x04, b'h', b'i', // COM
//!     0xFF, 0xDB, 0x00, 0x03, 0xAA, // DQT
//!     0xFF, 0xD9, // EOI
//! ];
//! let result = strip(jpeg, StripOptions { jfif: false }).unwrap();
//! assert_eq!(result.data, [0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x03, 0xAA, 0xFF, 0xD9]);
//! ```

pub mod cli;
pub mod error;
pub mod jpeg;
pub mod output;
pub mod processor;
pub mod terminal;

pub use cli::Config;
pub use error::{Error, JpegError, Result};
pub use jpeg::{StripOptions, StripResult, strip};
pub use processor::Processor;
