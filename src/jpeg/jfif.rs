//! Minimal JFIF APP0 header.

use super::marker::{APP0, PREFIX};

/// The APP0 segment inserted after SOI: JFIF 1.2, 1x1 dpi, no thumbnail.
#[rustfmt::skip]
pub const APP0_SEGMENT: [u8; 18] = [
    PREFIX, APP0,
    0x00, 0x10, // length 16
    b'J', b'F', b'I', b'F', 0x00,
    0x01, 0x02, // version 1.2
    0x01, // density unit: dots per inch
    0x00, 0x01, // X density
    0x00, 0x01, // Y density
    0x00, 0x00, // thumbnail width x height
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_field_matches_segment() {
        let length = u16::from_be_bytes([APP0_SEGMENT[2], APP0_SEGMENT[3]]) as usize;
        assert_eq!(length + 2, APP0_SEGMENT.len());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(&APP0_SEGMENT[4..9], b"JFIF\0");
    }
}
