//! Derived feature columns.

use super::schema::{AMOUNT_COL, LOG_AMOUNT_COL};
use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Appends `log_amount = ln(1 + Amount)`.
///
/// Amounts are non-negative after cleaning, so the result is always finite.
/// Pure: no rows are added or removed here.
pub fn add_log_amount(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column(
            col(AMOUNT_COL)
                .cast(DataType::Float64)
                .log1p()
                .alias(LOG_AMOUNT_COL),
        )
        .collect()
        .context("Failed to derive log_amount")
}
