//! Table loading and artifact writing.
//!
//! Artifacts are committed through [`StagedArtifact`]: each one is first
//! serialized to a hidden temporary sibling of its final path, and only
//! renamed into place once every artifact of the run has been written. An
//! interrupted run therefore never leaves a partial artifact set at the
//! final paths. Committing over an existing path overwrites it; callers
//! needing history must version paths themselves.

use crate::config::OutputFormat;
use crate::error::PrepError;
use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a table from a local path, dispatching on the file extension.
///
/// Delimited text (`.csv`, header row expected) and columnar binary
/// (`.parquet`) are supported; anything else is an unsupported format.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10_000))
            .with_has_header(true)
            .finish()
            .with_context(|| format!("Failed to scan CSV: {}", path.display()))?
            .collect()
            .with_context(|| format!("Failed to read CSV: {}", path.display())),
        "parquet" => {
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            ParquetReader::new(file)
                .finish()
                .with_context(|| format!("Failed to read Parquet: {}", path.display()))
        }
        _ => Err(PrepError::UnsupportedFormat(ext).into()),
    }
}

/// Writes a table in the requested encoding, creating parent directories.
pub fn save_table(df: &mut DataFrame, path: &Path, format: OutputFormat) -> Result<()> {
    create_parent_dirs(path)?;
    match format {
        OutputFormat::Parquet => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .context("Failed to write Parquet file")?;
        }
        OutputFormat::Csv => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .context("Failed to write CSV file")?;
        }
    }
    Ok(())
}

/// Writes the statistics document as indented JSON, creating parent
/// directories.
pub fn save_stats(stats: &super::stats::ReferenceStats, path: &Path) -> Result<()> {
    create_parent_dirs(path)?;
    let json =
        serde_json::to_string_pretty(stats).context("Failed to serialize reference statistics")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write statistics document: {}", path.display()))
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// An artifact serialized to a temporary path, awaiting its rename into
/// place. Dropping it without committing removes the temporary file.
#[derive(Debug)]
pub struct StagedArtifact {
    tmp: PathBuf,
    dest: PathBuf,
    committed: bool,
}

impl StagedArtifact {
    /// Prepares a staging path next to `dest`, creating `dest`'s parent
    /// directories so the later rename stays on one filesystem.
    pub fn new(dest: &Path) -> crate::error::Result<Self> {
        let file_name = dest
            .file_name()
            .ok_or_else(|| PrepError::InvalidPath(dest.display().to_string()))?;
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = dest.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
        Ok(Self {
            tmp,
            dest: dest.to_path_buf(),
            committed: false,
        })
    }

    /// Path the artifact should be serialized to.
    pub fn path(&self) -> &Path {
        &self.tmp
    }

    /// Moves the staged file to its final path, overwriting any previous
    /// artifact. Falls back to copy + remove when rename crosses a
    /// filesystem boundary.
    pub fn commit(mut self) -> crate::error::Result<()> {
        if fs::rename(&self.tmp, &self.dest).is_err() {
            fs::copy(&self.tmp, &self.dest)?;
            let _ = fs::remove_file(&self.tmp);
        }
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedArtifact {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}
