//! Reference statistics for drift monitoring.
//!
//! The document produced here is the training-time baseline a serving layer
//! diffs live traffic against, so it has to be computed identically on
//! every run: quantiles use linear interpolation between order statistics
//! (`QuantileMethod::Linear`), the standard deviation is the sample one
//! (`n - 1` denominator), and both maps serialize in sorted key order.

use super::schema::LABEL_COL;
use crate::error::PrepError;
use anyhow::{Context as _, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quantile probabilities reported for every summarized column.
pub const QUANTILE_PROBS: [f64; 5] = [0.01, 0.05, 0.5, 0.95, 0.99];

/// Columns summarized by default: the amount and its log transform.
pub const DEFAULT_STAT_COLUMNS: [&str; 2] = [super::schema::AMOUNT_COL, super::schema::LOG_AMOUNT_COL];

/// Distributional summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    /// Sample standard deviation; `0` when only one value is present.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    /// Quantile values keyed by probability, e.g. `"0.05"`.
    pub quantiles: BTreeMap<String, f64>,
}

/// Label balance over an entire table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBalance {
    /// Fraction of rows labeled fraud; `0` for an empty table.
    pub fraud_rate: f64,
    pub n_fraud: usize,
    pub n_non_fraud: usize,
}

/// The reference statistics document consumed by the serving layer.
///
/// Key names (`n_rows`, `columns`, `class_balance`) are a stable contract;
/// drift detection diffs two of these documents across training epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStats {
    pub n_rows: usize,
    pub columns: BTreeMap<String, ColumnStats>,
    pub class_balance: ClassBalance,
}

/// Builds the reference statistics document for `df`.
///
/// Each target column is summarized over its non-null numeric values only.
/// Columns absent from the table, or present but entirely null, are
/// silently omitted from `columns`. The label balance covers the whole
/// table and requires the label column.
pub fn build_reference_stats(df: &DataFrame, cols: &[&str]) -> Result<ReferenceStats> {
    let mut columns = BTreeMap::new();

    for &name in cols {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let series = column
            .as_materialized_series()
            .cast(&DataType::Float64)
            .with_context(|| format!("Failed to coerce column '{name}' to numeric"))?;
        let ca = series.f64()?;

        let valid = ca.len() - ca.null_count();
        if valid == 0 {
            continue;
        }
        let (Some(mean), Some(min), Some(max)) = (ca.mean(), ca.min(), ca.max()) else {
            continue;
        };
        let std = if valid > 1 { ca.std(1).unwrap_or(0.0) } else { 0.0 };

        let mut quantiles = BTreeMap::new();
        for &p in &QUANTILE_PROBS {
            if let Some(q) = ca.quantile(p, QuantileMethod::Linear)? {
                quantiles.insert(format!("{p}"), q);
            }
        }

        columns.insert(
            name.to_owned(),
            ColumnStats {
                mean,
                std,
                min,
                max,
                quantiles,
            },
        );
    }

    Ok(ReferenceStats {
        n_rows: df.height(),
        columns,
        class_balance: class_balance(df)?,
    })
}

/// Fraud/non-fraud counts over every row of the table, not filtered per
/// column. Labels other than 0 and 1 are counted in neither bucket.
fn class_balance(df: &DataFrame) -> Result<ClassBalance> {
    let label = df.column(LABEL_COL).map_err(|_| PrepError::Schema {
        column: LABEL_COL.to_owned(),
    })?;
    let series = label
        .as_materialized_series()
        .cast(&DataType::Float64)
        .context("Failed to coerce label column to numeric")?;
    let ca = series.f64()?;

    let n_fraud = ca.into_iter().flatten().filter(|&v| v == 1.0).count();
    let n_non_fraud = ca.into_iter().flatten().filter(|&v| v == 0.0).count();
    let fraud_rate = if df.height() == 0 {
        0.0
    } else {
        n_fraud as f64 / df.height() as f64
    };

    Ok(ClassBalance {
        fraud_rate,
        n_fraud,
        n_non_fraud,
    })
}
