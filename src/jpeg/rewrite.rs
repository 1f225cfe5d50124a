//! Single-pass marker-stream compaction.
//!
//! The buffer is rewritten in place with two cursors: `inp` walks the
//! source, `outp` trails behind it and only advances for retained bytes.
//! Since `outp <= inp` at every step, a retained range can always be moved
//! down with `copy_within` without clobbering bytes that are still unread.

use super::marker::{self, Marker, PREFIX, SOI};
use crate::error::JpegError;

/// Outcome of a successful [`compact`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compaction {
    /// Bytes retained at the front of the buffer, including the 2-byte SOI.
    pub retained: usize,
    /// Number of segments discarded.
    pub segments_removed: usize,
    /// Bytes found after the EOI marker (never retained).
    pub trailing: usize,
}

/// Compact `buf` so that its first [`Compaction::retained`] bytes hold SOI
/// followed by every image-essential segment and all scan data, with the
/// final EOI removed.
///
/// Bytes past `retained` are left in an unspecified state.
pub fn compact(buf: &mut [u8]) -> Result<Compaction, JpegError> {
    if buf.len() < 2 || buf[0] != PREFIX || buf[1] != SOI {
        return Err(JpegError::NotAJpeg);
    }

    let mut cursors = Cursors {
        buf,
        inp: 2,
        outp: 2,
    };
    let mut segments_removed = 0;

    loop {
        let offset = cursors.inp;
        let code = cursors.marker()?;

        match Marker::classify(code) {
            Marker::EndOfImage => break,
            Marker::Fill => cursors.inp += 1,
            Marker::Kept(code) => {
                let size = cursors.segment_size()?;
                log::debug!(
                    "keeping {} segment at offset {} ({} bytes)",
                    marker::name(code),
                    offset,
                    size
                );
                cursors.copy(size);
            }
            Marker::StartOfScan => {
                let size = cursors.segment_size()?;
                cursors.copy(size);
                let data_start = cursors.inp;
                cursors.copy_scan_data()?;
                log::debug!(
                    "keeping scan at offset {} ({} byte header, {} bytes of entropy-coded data)",
                    offset,
                    size,
                    cursors.inp - data_start
                );
            }
            Marker::Skippable(code) => {
                let size = cursors.segment_size()?;
                log::debug!(
                    "dropping {} segment 0x{:02X} at offset {} ({} bytes)",
                    marker::name(code),
                    code,
                    offset,
                    size
                );
                cursors.inp += size;
                segments_removed += 1;
            }
            Marker::StartOfImage | Marker::Restart(_) | Marker::Stuffing => {
                return Err(JpegError::InvalidMarkerSync {
                    offset: offset + 1,
                    found: code,
                });
            }
        }
    }

    let trailing = cursors.buf.len() - (cursors.inp + 2);
    if trailing > 0 {
        log::warn!("ignoring {} trailing bytes after EOI", trailing);
    }

    Ok(Compaction {
        retained: cursors.outp,
        segments_removed,
        trailing,
    })
}

struct Cursors<'a> {
    buf: &'a mut [u8],
    inp: usize,
    outp: usize,
}

impl Cursors<'_> {
    /// Return the code byte of the marker at `inp` without consuming it.
    fn marker(&self) -> Result<u8, JpegError> {
        if self.inp + 1 >= self.buf.len() {
            return Err(JpegError::TruncatedFile { offset: self.inp });
        }
        let byte = self.buf[self.inp];
        if byte != PREFIX {
            return Err(JpegError::InvalidMarkerSync {
                offset: self.inp,
                found: byte,
            });
        }
        Ok(self.buf[self.inp + 1])
    }

    /// On-disk size (marker + length field + body) of the segment at `inp`.
    fn segment_size(&self) -> Result<usize, JpegError> {
        let at = self.inp;
        let field = self
            .buf
            .get(at + 2..at + 4)
            .ok_or(JpegError::TruncatedFile { offset: at })?;
        let length = u16::from_be_bytes([field[0], field[1]]);
        if length < 2 {
            return Err(JpegError::InvalidSegmentLength { offset: at, length });
        }
        let size = 2 + usize::from(length);
        if at + size > self.buf.len() {
            return Err(JpegError::TruncatedFile { offset: at });
        }
        Ok(size)
    }

    /// Move `count` bytes from `inp` to `outp`.
    fn copy(&mut self, count: usize) {
        if self.inp != self.outp {
            self.buf.copy_within(self.inp..self.inp + count, self.outp);
        }
        self.inp += count;
        self.outp += count;
    }

    /// Copy entropy-coded data up to the next real marker, which is left
    /// unconsumed at `inp`.
    fn copy_scan_data(&mut self) -> Result<(), JpegError> {
        let start = self.inp;
        loop {
            let run = self.buf[self.inp..]
                .iter()
                .position(|&b| b == PREFIX)
                .ok_or(JpegError::TruncatedFile { offset: start })?;
            self.copy(run);

            let code = *self
                .buf
                .get(self.inp + 1)
                .ok_or(JpegError::TruncatedFile { offset: self.inp })?;
            if !marker::is_scan_data_pair(code) {
                return Ok(());
            }
            self.copy(2);
        }
    }
}
