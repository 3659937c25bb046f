// src/reader/mod.rs
mod scanner;
mod sync_reader;

pub use scanner::{scan, scan_bytes, ReadSeek};
pub use sync_reader::JfifReader;
