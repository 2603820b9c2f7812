//! The data preparation pipeline.
//!
//! One invocation runs the stages in a fixed order, synchronously, on data
//! it exclusively owns:
//!
//! ```text
//! raw CSV -> validate -> coerce -> clean -> derive -> split
//!                                                      |
//!                              train table <-----------+----> test table
//!                                   |
//!                          reference statistics
//! ```
//!
//! All three artifacts are staged before any of them is committed, so a
//! failed run leaves nothing at the final output paths. Concurrent runs
//! are safe only against disjoint output paths.

pub mod clean;
pub mod features;
pub mod io;
pub mod schema;
pub mod split;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::config::{BadLabelPolicy, PipelineConfig};
use anyhow::Result;
use polars::prelude::DataFrame;
use split::SplitConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub n_train: usize,
    pub n_test: usize,
    /// Fraud rate of the train partition.
    pub fraud_rate: f64,
    /// Rows whose label failed numeric parsing.
    pub bad_labels: usize,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    pub stats_path: PathBuf,
}

/// Validates, coerces, cleans and feature-enriches a raw table.
///
/// Returns the prepared table and the count of labels that failed numeric
/// parsing (handled per `policy`). This is the whole of the preparation up
/// to, but not including, the split.
pub fn clean_transform(df: &DataFrame, policy: BadLabelPolicy) -> Result<(DataFrame, usize)> {
    schema::ensure_columns(df)?;
    let (coerced, bad_labels) = clean::cast_types(df, policy)?;
    let cleaned = clean::basic_clean(coerced)?;
    let enriched = features::add_log_amount(cleaned)?;
    Ok((enriched, bad_labels))
}

/// Runs the full pipeline: load, prepare, split, summarize, write.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    info!(input = %config.input_path.display(), "Loading raw transaction table");
    let raw = io::load_table(&config.input_path)?;
    debug!(rows = raw.height(), cols = raw.width(), "Raw table loaded");

    let (table, bad_labels) = clean_transform(&raw, config.on_bad_label)?;
    if bad_labels > 0 {
        warn!(
            count = bad_labels,
            policy = %config.on_bad_label,
            "Labels failed numeric parsing"
        );
    }
    info!(
        kept = table.height(),
        dropped = raw.height() - table.height(),
        "Table cleaned"
    );

    let split_cfg = SplitConfig {
        test_fraction: config.test_fraction,
        sort_key: config.sort_key.clone(),
    };
    let (mut train, mut test) = split::split_train_test(&table, &split_cfg)?;
    debug!(train = train.height(), test = test.height(), "Split complete");

    let reference = stats::build_reference_stats(&train, &stats::DEFAULT_STAT_COLUMNS)?;

    let ext = config.output_format.extension();
    let train_path = config.output_dir.join(format!("train.{ext}"));
    let test_path = config.output_dir.join(format!("test.{ext}"));

    // Stage everything first; commit only once all three serialized.
    let staged_train = io::StagedArtifact::new(&train_path)?;
    io::save_table(&mut train, staged_train.path(), config.output_format)?;
    let staged_test = io::StagedArtifact::new(&test_path)?;
    io::save_table(&mut test, staged_test.path(), config.output_format)?;
    let staged_stats = io::StagedArtifact::new(&config.stats_path)?;
    io::save_stats(&reference, staged_stats.path())?;

    staged_train.commit()?;
    staged_test.commit()?;
    staged_stats.commit()?;
    info!(
        train = %train_path.display(),
        test = %test_path.display(),
        stats = %config.stats_path.display(),
        "Artifacts committed"
    );

    Ok(RunSummary {
        n_train: train.height(),
        n_test: test.height(),
        fraud_rate: reference.class_balance.fraud_rate,
        bad_labels,
        train_path,
        test_path,
        stats_path: config.stats_path.clone(),
    })
}
