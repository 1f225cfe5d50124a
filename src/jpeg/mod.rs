//! JPEG metadata stripping.
//!
//! A JPEG file is a sequence of segments introduced by `FF xx` markers. Only
//! the segments needed to decode the image survive:
//!
//! - SOI (FF D8): start of image
//! - SOF0 / SOF2 (FF C0, FF C2): baseline and progressive frame headers
//! - DHT (FF C4): Huffman tables
//! - DQT (FF DB): quantization tables
//! - DRI (FF DD): restart interval
//! - SOS (FF DA): scan header and the entropy-coded data behind it
//! - EOI (FF D9): end of image (re-synthesized)
//!
//! Everything else, including APP0-APP15 (JFIF, EXIF, XMP, ICC profiles,
//! IPTC, Adobe) and COM, is dropped. A fresh minimal JFIF APP0 header is
//! inserted after SOI unless [`StripOptions::jfif`] is off.

pub mod jfif;
pub mod marker;
pub mod rewrite;

use crate::error::JpegError;
use marker::{EOI, PREFIX};

/// Options for [`strip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Insert a minimal JFIF APP0 segment after SOI.
    pub jfif: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self { jfif: true }
    }
}

/// Result of stripping metadata from a JPEG.
#[derive(Debug)]
pub struct StripResult {
    /// The cleaned JPEG.
    pub data: Vec<u8>,
    /// Number of bytes the file shrank by.
    pub bytes_removed: u64,
    /// Number of segments dropped.
    pub segments_removed: usize,
}

/// Strip every non-image segment from `data`.
///
/// The buffer is consumed and reused for the output.
pub fn strip(mut data: Vec<u8>, options: StripOptions) -> Result<StripResult, JpegError> {
    let original_size = data.len() as u64;

    let compaction = rewrite::compact(&mut data)?;
    let retained = compaction.retained;

    if options.jfif {
        let header = jfif::APP0_SEGMENT.len();
        data.truncate(retained);
        data.resize(retained + header, 0);
        data.copy_within(2..retained, 2 + header);
        data[2..2 + header].copy_from_slice(&jfif::APP0_SEGMENT);
    } else {
        data.truncate(retained);
    }
    data.extend_from_slice(&[PREFIX, EOI]);

    Ok(StripResult {
        bytes_removed: original_size.saturating_sub(data.len() as u64),
        segments_removed: compaction.segments_removed,
        data,
    })
}

/// Create a small but structurally complete baseline JPEG for testing.
#[cfg(test)]
pub fn create_minimal_jpeg() -> Vec<u8> {
    vec![
        // SOI.
        0xFF, 0xD8,
        // APP0 (JFIF 1.1, no density).
        0xFF, 0xE0, 0x00, 0x10,
        b'J', b'F', b'I', b'F', 0x00,
        0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
        // DQT.
        0xFF, 0xDB, 0x00, 0x43, 0x00,
        0x08, 0x06, 0x06, 0x07, 0x06, 0x05, 0x08, 0x07,
        0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14,
        0x0D, 0x0C, 0x0B, 0x0B, 0x0C, 0x19, 0x12, 0x13,
        0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A,
        0x1C, 0x1C, 0x20, 0x24, 0x2E, 0x27, 0x20, 0x22,
        0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C,
        0x30, 0x31, 0x34, 0x34, 0x34, 0x1F, 0x27, 0x39,
        0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32,
        // SOF0.
        0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00,
        // DHT.
        0xFF, 0xC4, 0x00, 0x1F, 0x00,
        0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
        0x08, 0x09, 0x0A, 0x0B,
        // DRI.
        0xFF, 0xDD, 0x00, 0x04, 0x00, 0x01,
        // SOS.
        0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00,
        // Scan data with a stuffed byte and a restart marker.
        0xFB, 0xD3, 0xFF, 0x00, 0x28, 0xFF, 0xD0, 0xA2, 0x80, 0x0F,
        // EOI.
        0xFF, 0xD9,
    ]
}

/// Create a JPEG carrying EXIF, ICC and comment segments for testing.
#[cfg(test)]
pub fn create_jpeg_with_metadata() -> Vec<u8> {
    let minimal = create_minimal_jpeg();
    let mut data = minimal[..20].to_vec();

    // APP1 (EXIF).
    let exif = b"Exif\x00\x00Camera serial 12345";
    data.extend_from_slice(&[0xFF, 0xE1]);
    data.extend_from_slice(&((exif.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(exif);

    // APP2 (ICC profile).
    let icc = b"ICC_PROFILE\x00\x01\x01profile-bytes";
    data.extend_from_slice(&[0xFF, 0xE2]);
    data.extend_from_slice(&((icc.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(icc);

    // COM.
    let comment = b"shot at home";
    data.extend_from_slice(&[0xFF, 0xFE]);
    data.extend_from_slice(&((comment.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(comment);

    data.extend_from_slice(&minimal[20..]);
    data
}
