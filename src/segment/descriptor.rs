// src/segment/descriptor.rs
use crate::types::Marker;
use std::fmt;

/// Position and extent of one marker segment within a JFIF stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentDescriptor {
    /// Offset of the marker's leading `0xFF` byte
    pub offset: u64,
    pub marker: Marker,
    /// Marker bytes plus the value of the length field. For SOS and EOI the
    /// segment runs to the end of the stream.
    pub total_length: u64,
}

impl SegmentDescriptor {
    /// Size of the marker plus its length field.
    pub const HEADER_SIZE: u64 = 4;

    pub fn new(offset: u64, marker: Marker, total_length: u64) -> Self {
        SegmentDescriptor {
            offset,
            marker,
            total_length,
        }
    }

    /// Offset one past the last byte of the segment
    pub fn end(&self) -> u64 {
        self.offset + self.total_length
    }

    pub fn is_terminal(&self) -> bool {
        self.marker.is_terminal()
    }

    pub fn name(&self) -> &'static str {
        self.marker.name()
    }
}

impl fmt::Display for SegmentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} ({} bytes)",
            self.marker, self.offset, self.total_length
        )
    }
}
