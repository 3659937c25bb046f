// src/lib.rs
//! # jfif-rs
//!
//! A small library for walking the marker segments of JPEG/JFIF files and
//! working with the vendor watermark carried in an APP0 segment.
//!
//! ## Features
//!
//! - **Segment Table**: Scan a file into an ordered table of contents, from the
//!   first marker after SOI up to and including SOS
//! - **Watermark Detection**: Recognise the APP0 segment whose payload starts
//!   with the `ULTRAIDHOLOKOTE` signature
//! - **Byte-Exact Rewriting**: Copy every segment verbatim except the watermark,
//!   which is replaced from an external source
//! - **Extraction**: Dump the watermark segment on its own
//!
//! ## Quick Start
//!
//! ### Listing Segments
//!
//! ```rust,no_run
//! use jfif_rs::*;
//!
//! fn main() -> Result<()> {
//!     let reader = JfifReader::open("photo.jpg")?;
//!
//!     for entry in reader.entries() {
//!         println!("{}", entry);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Replacing the Watermark
//!
//! ```rust,no_run
//! use jfif_rs::*;
//!
//! fn main() -> Result<()> {
//!     // Save the current watermark segment
//!     let dumped = dump_file("photo.jpg", "watermark.bin", true)?;
//!     println!("Watermark at offset {}", dumped.segment.offset);
//!
//!     // Write a copy carrying a different one
//!     let summary = patch_file("photo.jpg", "patched.jpg", "other.bin", true)?;
//!     println!("Wrote {} bytes", summary.bytes_written);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### In-Memory Use
//!
//! ```rust
//! use jfif_rs::*;
//!
//! # fn main() -> Result<()> {
//! let data = [0xFF, 0xD8, 0xFF, 0xFE, 0x00, 0x04, b'h', b'i', 0xFF, 0xDA, 0x00];
//! let toc = scan_bytes(&data)?;
//! assert_eq!(toc.len(), 2);
//! assert_eq!(toc.segments()[0].marker, Marker::COM);
//! # Ok(())
//! # }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod segment;
pub mod reader;
pub mod writer;

// Re-export commonly used types at the crate root for convenience
pub use error::{JfifError, Result};

// Type exports
pub use types::{Marker, MARKER_PREFIX, SOI_SIGNATURE};

// Segment exports
pub use segment::{
    SegmentDescriptor,
    TableOfContents,
    TocEntry,
    WATERMARK_SIGNATURE,
};

// Reader exports
pub use reader::{
    JfifReader,
    ReadSeek,
    scan,
    scan_bytes,
};

// Writer exports
pub use writer::{
    JfifWriter,
    PatchSummary,
    DumpSummary,
    patch,
    dump,
    list_file,
    patch_file,
    dump_file,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use jfif_rs::prelude::*;
    //! ```

    pub use crate::error::{JfifError, Result};
    pub use crate::types::Marker;
    pub use crate::segment::{SegmentDescriptor, TableOfContents};
    pub use crate::reader::JfifReader;
    pub use crate::writer::{dump_file, list_file, patch_file};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
