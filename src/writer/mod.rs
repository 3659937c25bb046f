// src/writer/mod.rs
mod file_ops;
mod rewriter;

pub use file_ops::{dump_file, list_file, patch_file};
pub use rewriter::{dump, patch, DumpSummary, JfifWriter, PatchSummary};
