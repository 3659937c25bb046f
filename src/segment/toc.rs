// src/segment/toc.rs
use crate::segment::SegmentDescriptor;
use crate::types::{Marker, SOI_SIGNATURE};
use std::fmt;

/// Ordered segment descriptors from the marker after SOI up to and including
/// the terminating SOS (or EOI) segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    segments: Vec<SegmentDescriptor>,
    stream_len: u64,
}

impl TableOfContents {
    pub(crate) fn new(segments: Vec<SegmentDescriptor>, stream_len: u64) -> Self {
        TableOfContents {
            segments,
            stream_len,
        }
    }

    pub fn segments(&self) -> &[SegmentDescriptor] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SegmentDescriptor> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SegmentDescriptor> {
        self.segments.get(index)
    }

    pub fn last(&self) -> Option<&SegmentDescriptor> {
        self.segments.last()
    }

    /// Length of the stream the table was built from
    pub fn stream_len(&self) -> u64 {
        self.stream_len
    }

    /// The SOS or EOI entry closing the table, if the scan reached one.
    pub fn terminator(&self) -> Option<&SegmentDescriptor> {
        self.segments.last().filter(|desc| desc.is_terminal())
    }

    /// Every segment starts where the previous one ends, the first one
    /// directly after the SOI signature.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = SOI_SIGNATURE.len() as u64;
        for desc in &self.segments {
            if desc.offset != expected {
                return false;
            }
            expected = desc.end();
        }
        true
    }

    /// Last descriptor satisfying `pred`; later matches win over earlier ones.
    pub fn find_last<P>(&self, mut pred: P) -> Option<&SegmentDescriptor>
    where
        P: FnMut(&SegmentDescriptor) -> bool,
    {
        self.segments.iter().rev().find(|desc| pred(desc))
    }

    /// Listing rows, one per segment
    pub fn entries(&self) -> Vec<TocEntry> {
        self.segments.iter().map(TocEntry::from).collect()
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a SegmentDescriptor;
    type IntoIter = std::slice::Iter<'a, SegmentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// One row of a segment listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub offset: u64,
    pub marker: Marker,
    pub total_length: u64,
    pub name: &'static str,
}

impl From<&SegmentDescriptor> for TocEntry {
    fn from(desc: &SegmentDescriptor) -> Self {
        TocEntry {
            offset: desc.offset,
            marker: desc.marker,
            total_length: desc.total_length,
            name: desc.name(),
        }
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t{}:\t{:x}\t{}\t{}",
            self.offset, self.marker, self.total_length, self.name
        )
    }
}
