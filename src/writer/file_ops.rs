// src/writer/file_ops.rs
//! Path-based list/patch/dump.
//!
//! Output is staged in a temporary file next to the destination and only
//! persisted once the whole operation succeeded, so a failed run never
//! leaves an output file behind.

use crate::error::{JfifError, Result};
use crate::reader::JfifReader;
use crate::segment::TocEntry;
use crate::writer::rewriter::{self, DumpSummary, PatchSummary};
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Scan `path` and return one listing row per segment.
pub fn list_file(path: impl AsRef<Path>) -> Result<Vec<TocEntry>> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    let reader = JfifReader::open(path)?;
    Ok(reader.entries())
}

/// Write `input` to `output` with the watermark segment replaced by the
/// contents of `replacement`.
pub fn patch_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    replacement: impl AsRef<Path>,
    overwrite: bool,
) -> Result<PatchSummary> {
    let (input, output, replacement) = (input.as_ref(), output.as_ref(), replacement.as_ref());
    info!(
        "Patching file: {} with patch: {}",
        input.display(),
        replacement.display()
    );
    check_output(output, overwrite)?;

    let mut reader = JfifReader::open(input)?;
    // The replacement is only opened when there is a watermark to replace.
    if reader.watermark()?.is_none() {
        return publish(output, overwrite, |out| {
            rewriter::patch(&mut reader, out, &mut io::empty())
        });
    }
    let mut patch_source = BufReader::new(File::open(replacement)?);

    publish(output, overwrite, |out| {
        rewriter::patch(&mut reader, out, &mut patch_source)
    })
}

/// Write the watermark segment of `input` to `output`.
pub fn dump_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    overwrite: bool,
) -> Result<DumpSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!("Reading {} and dump to {}", input.display(), output.display());
    check_output(output, overwrite)?;

    let mut reader = JfifReader::open(input)?;
    // Checked before staging so a missing watermark creates no file at all.
    if reader.watermark()?.is_none() {
        return Err(JfifError::WatermarkNotFound);
    }

    publish(output, overwrite, |out| rewriter::dump(&mut reader, out))
}

fn check_output(output: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && output.exists() {
        return Err(JfifError::OutputExists(output.to_path_buf()));
    }
    Ok(())
}

/// Run `write` against a temp file in the output's directory, then move it
/// into place. The temp file is removed on every error path.
fn publish<T, F>(output: &Path, overwrite: bool, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<T>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;

    let value = {
        let mut out = BufWriter::new(staged.as_file_mut());
        let value = write(&mut out)?;
        out.flush()?;
        value
    };

    if overwrite {
        staged.persist(output).map_err(|e| JfifError::Io(e.error))?;
    } else {
        staged
            .persist_noclobber(output)
            .map_err(|e| JfifError::Io(e.error))?;
    }
    info!("Writing {}", output.display());
    Ok(value)
}
