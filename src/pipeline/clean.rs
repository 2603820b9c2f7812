//! Type coercion and row cleaning.
//!
//! Coercion never fails on malformed values: labels degrade per the
//! configured [`BadLabelPolicy`], amounts and identifiers degrade to null.
//! The cleaner then drops every row that is structurally unusable, so
//! downstream stages only ever see non-null, non-negative amounts.

use super::schema::{AMOUNT_COL, ID_COL, LABEL_COL};
use crate::config::BadLabelPolicy;
use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Coerces the raw columns into their expected types.
///
/// Returns the coerced table and the number of rows whose label failed
/// numeric parsing (missing values included). Under
/// [`BadLabelPolicy::DefaultNonFraud`] those labels become `0`; under
/// [`BadLabelPolicy::Drop`] they stay null for [`basic_clean`] to remove.
pub fn cast_types(df: &DataFrame, policy: BadLabelPolicy) -> Result<(DataFrame, usize)> {
    let mut out = df.clone();

    let label = out
        .column(LABEL_COL)?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .context("Failed to coerce label column")?;
    let bad_labels = label.null_count();
    let label = match policy {
        BadLabelPolicy::DefaultNonFraud => label.fill_null(FillNullStrategy::Zero)?,
        BadLabelPolicy::Drop => label,
    };
    out.replace(LABEL_COL, label.cast(&DataType::Int64)?)?;

    let amount = out
        .column(AMOUNT_COL)?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .context("Failed to coerce amount column")?;
    out.replace(AMOUNT_COL, amount)?;

    // Null identifiers are tolerated; the splitter sorts them last.
    if out.column(ID_COL).is_ok() {
        let id = out
            .column(ID_COL)?
            .as_materialized_series()
            .cast(&DataType::Float64)
            .context("Failed to coerce identifier column")?;
        out.replace(ID_COL, id)?;
    }

    Ok((out, bad_labels))
}

/// Drops rows with a null or negative amount, and rows with a null label.
///
/// A row is either fully retained or fully dropped. Null labels only exist
/// here under [`BadLabelPolicy::Drop`].
pub fn basic_clean(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .filter(
            col(AMOUNT_COL)
                .is_not_null()
                .and(col(AMOUNT_COL).gt_eq(lit(0.0))),
        )
        .filter(col(LABEL_COL).is_not_null())
        .collect()
        .context("Failed to apply row filters")
}
