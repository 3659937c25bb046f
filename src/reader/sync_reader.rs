// src/reader/sync_reader.rs
use crate::error::{JfifError, Result};
use crate::reader::scanner::{scan, ReadSeek};
use crate::segment::{watermark, SegmentDescriptor, TableOfContents, TocEntry, WATERMARK_HEADER_LEN};
use crate::types::Marker;
use bytes::Bytes;
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, SeekFrom, Write};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Random-access JFIF reader holding the stream and its table of contents
pub struct JfifReader<R: ReadSeek> {
    pub(crate) file: R,
    toc: TableOfContents,
}

/// Constructor for standard file I/O
impl JfifReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(65536, file))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl JfifReader<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_reader(Cursor::new(mmap))
    }
}

impl<'a> JfifReader<Cursor<&'a [u8]>> {
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

/// Generic implementation for all JfifReader variants
impl<R: ReadSeek> JfifReader<R> {
    /// Wrap a stream, scanning it once up front.
    pub fn from_reader(mut file: R) -> Result<Self> {
        let toc = scan(&mut file)?;
        Ok(JfifReader { file, toc })
    }

    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    pub fn segment_count(&self) -> usize {
        self.toc.len()
    }

    pub fn stream_len(&self) -> u64 {
        self.toc.stream_len()
    }

    /// Listing rows for every scanned segment
    pub fn entries(&self) -> Vec<TocEntry> {
        self.toc.entries()
    }

    /// Read the whole segment, marker and length field included.
    pub fn read_segment(&mut self, desc: &SegmentDescriptor) -> Result<Bytes> {
        self.check_bounds(desc)?;
        self.file.seek(SeekFrom::Start(desc.offset))?;

        let stream_len = self.toc.stream_len();
        let mut buf = vec![0u8; desc.total_length as usize];
        self.file.read_exact(&mut buf).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                JfifError::truncated(desc.offset, desc.total_length, stream_len)
            } else {
                JfifError::Io(e)
            }
        })?;
        Ok(Bytes::from(buf))
    }

    /// Stream the segment into `out` without buffering it whole.
    pub fn copy_segment<W: Write + ?Sized>(
        &mut self,
        desc: &SegmentDescriptor,
        out: &mut W,
    ) -> Result<u64> {
        self.check_bounds(desc)?;
        self.file.seek(SeekFrom::Start(desc.offset))?;

        let copied = io::copy(&mut (&mut self.file).take(desc.total_length), out)?;
        if copied != desc.total_length {
            return Err(JfifError::TruncatedInput {
                offset: desc.offset,
                requested: desc.total_length,
                available: copied,
            });
        }
        Ok(copied)
    }

    /// Whether `desc` is the watermark segment. The stream position is left
    /// untouched.
    pub fn is_watermark(&mut self, desc: &SegmentDescriptor) -> Result<bool> {
        if desc.marker != Marker::APP0 {
            return Ok(false);
        }
        let header = self.read_at(desc.offset, WATERMARK_HEADER_LEN)?;
        Ok(watermark::is_watermark(desc, &header))
    }

    /// The watermark segment, if any. When several segments carry the
    /// signature the last one in stream order is returned.
    pub fn watermark(&mut self) -> Result<Option<SegmentDescriptor>> {
        let segments: Vec<SegmentDescriptor> = self.toc.segments().to_vec();
        let mut flagged = Vec::new();
        for desc in &segments {
            if self.is_watermark(desc)? {
                debug!("Watermark signature found in {}", desc);
                flagged.push(desc.offset);
            }
        }
        Ok(self.toc.find_last(|desc| flagged.contains(&desc.offset)).copied())
    }

    /// Bounded read of at most `len` bytes at `offset`, restoring the stream
    /// position afterwards. Returns fewer bytes near the end of the stream.
    fn read_at(&mut self, offset: u64, len: usize) -> Result<Vec<u8>> {
        let saved = self.file.stream_position()?;
        let result = self.read_at_inner(offset, len);
        let restored = self.file.seek(SeekFrom::Start(saved));
        let header = result?;
        restored?;
        Ok(header)
    }

    fn read_at_inner(&mut self, offset: u64, len: usize) -> Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(offset))?;
        let mut buf = Vec::with_capacity(len);
        (&mut self.file).take(len as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn check_bounds(&self, desc: &SegmentDescriptor) -> Result<()> {
        let stream_len = self.toc.stream_len();
        if desc.end() > stream_len {
            return Err(JfifError::truncated(desc.offset, desc.total_length, stream_len));
        }
        Ok(())
    }
}
