//! Column names and schema validation for raw transaction tables.

use crate::error::{PrepError, Result};
use polars::prelude::DataFrame;

/// Binary fraud label column, coercible to {0, 1}.
pub const LABEL_COL: &str = "Class";
/// Non-negative monetary amount column.
pub const AMOUNT_COL: &str = "Amount";
/// Optional row identifier used for deterministic ordering.
pub const ID_COL: &str = "id";
/// Derived log-scaled amount column.
pub const LOG_AMOUNT_COL: &str = "log_amount";

/// Verifies the mandatory columns are present. Read-only.
pub fn ensure_columns(df: &DataFrame) -> Result<()> {
    for required in [LABEL_COL, AMOUNT_COL] {
        if df.column(required).is_err() {
            return Err(PrepError::Schema {
                column: required.to_owned(),
            });
        }
    }
    Ok(())
}
