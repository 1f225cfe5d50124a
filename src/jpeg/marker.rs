//! JPEG marker codes and their classification.
//!
//! A marker is `0xFF` followed by a code byte. The rewriter never stores
//! markers; it classifies the code byte on the fly into a [`Marker`].

/// Marker introducer.
pub const PREFIX: u8 = 0xFF;

/// Start of image.
pub const SOI: u8 = 0xD8;
/// End of image.
pub const EOI: u8 = 0xD9;
/// Baseline DCT frame.
pub const SOF0: u8 = 0xC0;
/// Progressive DCT frame.
pub const SOF2: u8 = 0xC2;
/// Huffman table.
pub const DHT: u8 = 0xC4;
/// Quantization table.
pub const DQT: u8 = 0xDB;
/// Restart interval.
pub const DRI: u8 = 0xDD;
/// Start of scan.
pub const SOS: u8 = 0xDA;
/// JFIF application segment.
pub const APP0: u8 = 0xE0;

/// First restart marker.
pub const RST0: u8 = 0xD0;
/// Last restart marker.
pub const RST7: u8 = 0xD7;

/// Byte following `0xFF` when the `0xFF` is literal scan data.
pub const STUFFING: u8 = 0x00;

/// What a code byte means at a position where a marker is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    StartOfImage,
    EndOfImage,
    /// Table or frame segment copied verbatim.
    Kept(u8),
    /// Start of scan; its header is copied and the entropy-coded data follows.
    StartOfScan,
    Restart(u8),
    Stuffing,
    /// A second `0xFF`: the first one was a fill byte.
    Fill,
    /// Any other segment with a length field. Dropped from the output.
    Skippable(u8),
}

impl Marker {
    /// Classify the code byte that follows a `0xFF`.
    pub fn classify(code: u8) -> Self {
        match code {
            SOI => Marker::StartOfImage,
            EOI => Marker::EndOfImage,
            SOS => Marker::StartOfScan,
            SOF0 | SOF2 | DHT | DQT | DRI => Marker::Kept(code),
            RST0..=RST7 => Marker::Restart(code),
            STUFFING => Marker::Stuffing,
            PREFIX => Marker::Fill,
            _ => Marker::Skippable(code),
        }
    }
}

/// Whether `0xFF code` inside scan data is data rather than a real marker.
pub fn is_scan_data_pair(code: u8) -> bool {
    code == STUFFING || (RST0..=RST7).contains(&code)
}

/// Short human-readable name for a code byte, used in log output.
pub fn name(code: u8) -> &'static str {
    match code {
        SOI => "SOI",
        EOI => "EOI",
        SOF0 => "SOF0",
        0xC1 => "SOF1",
        SOF2 => "SOF2",
        0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => "SOFn",
        DHT => "DHT",
        0xCC => "DAC",
        DQT => "DQT",
        DRI => "DRI",
        SOS => "SOS",
        RST0..=RST7 => "RSTn",
        APP0 => "APP0 (JFIF)",
        0xE1 => "APP1 (EXIF/XMP)",
        0xE2 => "APP2 (ICC)",
        0xED => "APP13 (IPTC)",
        0xEE => "APP14 (Adobe)",
        0xE3..=0xEC | 0xEF => "APPn",
        0xFE => "COM",
        _ => "unknown",
    }
}
