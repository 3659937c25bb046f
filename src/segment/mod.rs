// src/segment/mod.rs
mod descriptor;
mod toc;
pub mod watermark;

pub use descriptor::SegmentDescriptor;
pub use toc::{TableOfContents, TocEntry};
pub use watermark::{WATERMARK_HEADER_LEN, WATERMARK_SIGNATURE};
