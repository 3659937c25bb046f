// src/reader/scanner.rs
use crate::error::{JfifError, Result};
use crate::segment::{SegmentDescriptor, TableOfContents};
use crate::types::{Marker, MARKER_PREFIX, SOI_SIGNATURE};
use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};
use std::io::{Cursor, Read, Seek, SeekFrom};

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Build the table of contents of a JFIF stream.
///
/// Scanning always starts at offset 0 and stops after the first SOS or EOI
/// segment, which is taken to extend to the end of the stream. The stream
/// position observed by the caller is the same before and after the call,
/// whether the scan succeeds or not.
pub fn scan<R: ReadSeek + ?Sized>(stream: &mut R) -> Result<TableOfContents> {
    let origin = stream.stream_position()?;
    let result = scan_from_start(stream);
    // A scan error takes precedence over a failure to restore the position.
    let restored = stream.seek(SeekFrom::Start(origin));
    let toc = result?;
    restored?;
    Ok(toc)
}

/// Scan an in-memory JFIF image.
pub fn scan_bytes(data: &[u8]) -> Result<TableOfContents> {
    scan(&mut Cursor::new(data))
}

fn scan_from_start<R: ReadSeek + ?Sized>(stream: &mut R) -> Result<TableOfContents> {
    let stream_len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(0))?;

    if stream_len < SOI_SIGNATURE.len() as u64 {
        return Err(JfifError::malformed(0, "stream is shorter than the SOI signature"));
    }

    let mut soi = [0u8; 2];
    stream.read_exact(&mut soi)?;
    if soi != SOI_SIGNATURE {
        return Err(JfifError::malformed(
            0,
            format!("invalid magic value {:02X} {:02X}, expected FF D8", soi[0], soi[1]),
        ));
    }

    let mut segments = Vec::new();
    let mut offset = SOI_SIGNATURE.len() as u64;

    loop {
        let desc = read_segment_descriptor(stream, offset, stream_len)?;
        trace!("{:>10}  {:x}  {:>8}  {}", desc.offset, desc.marker, desc.total_length, desc.name());
        segments.push(desc);

        if desc.is_terminal() {
            break;
        }
        offset = desc.end();
        stream.seek(SeekFrom::Start(offset))?;
    }

    debug!("Scanned {} segments from a {} byte stream", segments.len(), stream_len);
    Ok(TableOfContents::new(segments, stream_len))
}

/// Read the marker at `offset` (the stream must be positioned there) and
/// work out how far its segment extends.
fn read_segment_descriptor<R: ReadSeek + ?Sized>(
    stream: &mut R,
    offset: u64,
    stream_len: u64,
) -> Result<SegmentDescriptor> {
    let remaining = stream_len - offset;
    if remaining < 2 {
        return Err(JfifError::truncated(offset, 2, stream_len));
    }

    let prefix = stream.read_u8()?;
    if prefix != MARKER_PREFIX {
        return Err(JfifError::malformed(
            offset,
            format!("expected marker prefix 0xFF, found 0x{:02X}", prefix),
        ));
    }
    let marker = Marker::new(stream.read_u8()?);

    if !marker.has_length() {
        return Ok(SegmentDescriptor::new(offset, marker, remaining));
    }

    if remaining < SegmentDescriptor::HEADER_SIZE {
        return Err(JfifError::truncated(offset + 2, 2, stream_len));
    }
    let length = stream.read_u16::<BigEndian>()? as u64;
    if length < 2 {
        return Err(JfifError::malformed(
            offset + 2,
            format!("invalid length {} for {} segment", length, marker),
        ));
    }

    let total_length = 2 + length;
    if total_length > remaining {
        return Err(JfifError::truncated(
            offset + SegmentDescriptor::HEADER_SIZE,
            length - 2,
            stream_len,
        ));
    }

    Ok(SegmentDescriptor::new(offset, marker, total_length))
}
