//! Deterministic train/test partitioning.
//!
//! The split is a boundary split of a stably ordered sequence, not a random
//! sample: identical input and configuration always yield identical
//! partitions, which keeps reference statistics comparable across retrains.

use crate::error::PrepError;
use anyhow::{Context as _, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// How a cleaned table is partitioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of rows routed to the test set, in `[0, 1]`.
    pub test_fraction: f64,
    /// Ascending sort key applied before the split. `None`, or a key the
    /// table does not carry, keeps the table's current row order.
    pub sort_key: Option<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            sort_key: Some(super::schema::ID_COL.to_owned()),
        }
    }
}

/// Splits a table into `(train, test)`.
///
/// Rows are ordered by a stable ascending sort on the configured key (ties
/// and null keys keep their original relative order, nulls last), then cut
/// at `n - ceil(test_fraction * n)`: train is the prefix, test the suffix.
pub fn split_train_test(df: &DataFrame, cfg: &SplitConfig) -> Result<(DataFrame, DataFrame)> {
    if !(0.0..=1.0).contains(&cfg.test_fraction) {
        return Err(PrepError::Config(format!(
            "test_fraction must be within [0, 1], got {}",
            cfg.test_fraction
        ))
        .into());
    }

    let ordered = match cfg.sort_key.as_deref() {
        Some(key) if df.column(key).is_ok() => df
            .sort(
                [key],
                SortMultipleOptions::default()
                    .with_maintain_order(true)
                    .with_nulls_last(true),
            )
            .with_context(|| format!("Failed to sort by '{key}'"))?,
        _ => df.clone(),
    };

    let n = ordered.height();
    let n_test = (cfg.test_fraction * n as f64).ceil() as usize;
    let n_train = n - n_test;

    let train = ordered.slice(0, n_train);
    let test = ordered.slice(n_train as i64, n_test);
    Ok((train, test))
}
