// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JfifError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed container at offset {offset}: {reason}")]
    MalformedContainer { offset: u64, reason: String },

    #[error("Truncated input at offset {offset}: requested {requested} bytes, {available} available")]
    TruncatedInput { offset: u64, requested: u64, available: u64 },

    #[error("No watermark segment found")]
    WatermarkNotFound,

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),
}

impl JfifError {
    pub(crate) fn malformed(offset: u64, reason: impl Into<String>) -> Self {
        JfifError::MalformedContainer {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn truncated(offset: u64, requested: u64, stream_len: u64) -> Self {
        JfifError::TruncatedInput {
            offset,
            requested,
            available: stream_len.saturating_sub(offset),
        }
    }
}

pub type Result<T> = std::result::Result<T, JfifError>;
