// src/segment/watermark.rs
//! Recognition of the vendor watermark carried in an APP0 segment.
//!
//! The watermark segment is an ordinary APP0 segment whose payload starts
//! with a fixed ASCII signature directly after the marker and length field.

use crate::segment::SegmentDescriptor;
use crate::types::Marker;

/// Signature found at `offset + 4` of a watermark segment
pub const WATERMARK_SIGNATURE: &[u8; 15] = b"ULTRAIDHOLOKOTE";

/// Bytes from the segment start needed to classify it.
pub const WATERMARK_HEADER_LEN: usize =
    SegmentDescriptor::HEADER_SIZE as usize + WATERMARK_SIGNATURE.len();

/// Check whether `header`, the bytes starting at `desc.offset`, belong to a
/// watermark segment. Slices shorter than [`WATERMARK_HEADER_LEN`] never match.
pub fn is_watermark(desc: &SegmentDescriptor, header: &[u8]) -> bool {
    if desc.marker != Marker::APP0 {
        return false;
    }
    if header.len() < WATERMARK_HEADER_LEN {
        return false;
    }
    // The length field (bytes 2..4) is not consulted.
    header[..2] == Marker::APP0.to_bytes()
        && &header[SegmentDescriptor::HEADER_SIZE as usize..WATERMARK_HEADER_LEN]
            == WATERMARK_SIGNATURE
}
