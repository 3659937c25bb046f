// src/writer/rewriter.rs
use crate::error::{JfifError, Result};
use crate::reader::{JfifReader, ReadSeek};
use crate::segment::SegmentDescriptor;
use crate::types::SOI_SIGNATURE;
use log::{debug, info, warn};
use std::io::{self, Read, Write};

/// Outcome of a patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSummary {
    /// Segments in the source table of contents
    pub segments: usize,
    /// Segments copied verbatim
    pub copied: usize,
    /// The watermark segment that was substituted, if one was found
    pub replaced: Option<SegmentDescriptor>,
    /// Bytes taken from the replacement source
    pub replacement_len: u64,
    pub bytes_written: u64,
}

/// Outcome of a dump run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub segment: SegmentDescriptor,
    pub bytes_written: u64,
}

/// Output side of a rewrite, counting the bytes it has emitted.
pub struct JfifWriter<W: Write> {
    out: W,
    bytes_written: u64,
}

impl<W: Write> JfifWriter<W> {
    pub fn new(out: W) -> Self {
        JfifWriter {
            out,
            bytes_written: 0,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn write_soi(&mut self) -> Result<()> {
        self.out.write_all(&SOI_SIGNATURE)?;
        self.bytes_written += SOI_SIGNATURE.len() as u64;
        Ok(())
    }

    /// Copy a segment of `reader` verbatim.
    pub fn copy_segment<R: ReadSeek>(
        &mut self,
        reader: &mut JfifReader<R>,
        desc: &SegmentDescriptor,
    ) -> Result<u64> {
        debug!("write section {} to {}", desc.offset, self.bytes_written);
        let copied = reader.copy_segment(desc, &mut self.out)?;
        self.bytes_written += copied;
        Ok(copied)
    }

    /// Copy everything `source` yields in place of a segment.
    pub fn write_replacement<P: Read + ?Sized>(&mut self, source: &mut P) -> Result<u64> {
        debug!("replace section at {} from patch", self.bytes_written);
        let copied = io::copy(source, &mut self.out)?;
        self.bytes_written += copied;
        Ok(copied)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Rewrite the image into `out`, substituting the contents of `replacement`
/// for the watermark segment.
///
/// The replacement is written as-is; its length is not reconciled with the
/// length field of any segment. Without a watermark the output is a verbatim
/// copy and `replacement` is never read.
pub fn patch<R, W, P>(
    reader: &mut JfifReader<R>,
    out: W,
    replacement: &mut P,
) -> Result<PatchSummary>
where
    R: ReadSeek,
    W: Write,
    P: Read + ?Sized,
{
    let target = reader.watermark()?;
    let segments: Vec<SegmentDescriptor> = reader.toc().segments().to_vec();

    let mut writer = JfifWriter::new(out);
    writer.write_soi()?;

    let mut copied = 0;
    let mut replacement_len = 0;
    for desc in &segments {
        if Some(*desc) == target {
            replacement_len = writer.write_replacement(replacement)?;
            if replacement_len != desc.total_length {
                warn!(
                    "Replacement is {} bytes but the watermark segment at {} spans {}; length field left as-is",
                    replacement_len, desc.offset, desc.total_length
                );
            }
        } else {
            writer.copy_segment(reader, desc)?;
            copied += 1;
        }
    }
    writer.flush()?;

    match &target {
        Some(desc) => info!("Replaced watermark segment at offset {}", desc.offset),
        None => info!("No watermark segment found, copied all {} segments", segments.len()),
    }

    Ok(PatchSummary {
        segments: segments.len(),
        copied,
        replaced: target,
        replacement_len,
        bytes_written: writer.bytes_written(),
    })
}

/// Write the complete watermark segment, marker and length field included,
/// into `out`. Nothing is written when no watermark is present.
pub fn dump<R, W>(reader: &mut JfifReader<R>, out: W) -> Result<DumpSummary>
where
    R: ReadSeek,
    W: Write,
{
    let segment = reader.watermark()?.ok_or(JfifError::WatermarkNotFound)?;

    let mut writer = JfifWriter::new(out);
    writer.copy_segment(reader, &segment)?;
    writer.flush()?;

    info!("Dumped {} byte watermark segment from offset {}", segment.total_length, segment.offset);
    Ok(DumpSummary {
        segment,
        bytes_written: writer.bytes_written(),
    })
}
