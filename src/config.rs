//! Configuration surface for a pipeline run.

use crate::error::PrepError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Tabular encoding for the train/test artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Columnar binary encoding.
    Parquet,
    /// Delimited text encoding, header included.
    Csv,
}

impl OutputFormat {
    /// File extension used for artifacts in this encoding.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Parquet => "parquet",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parquet" => Ok(Self::Parquet),
            "csv" => Ok(Self::Csv),
            _ => Err(PrepError::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What the pipeline does with a row whose label fails numeric parsing.
///
/// The original tool silently coerced such labels to non-fraud, which can
/// under-count fraud when the label column is corrupted. The choice is now
/// explicit; either way the affected row count is logged as a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadLabelPolicy {
    /// Treat the row as non-fraud (label `0`) and keep it.
    #[default]
    DefaultNonFraud,
    /// Drop the row during cleaning.
    Drop,
}

impl FromStr for BadLabelPolicy {
    type Err = PrepError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default-non-fraud" => Ok(Self::DefaultNonFraud),
            "drop" => Ok(Self::Drop),
            _ => Err(PrepError::Config(format!(
                "unknown bad-label policy '{s}' (expected 'default-non-fraud' or 'drop')"
            ))),
        }
    }
}

impl fmt::Display for BadLabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultNonFraud => f.write_str("default-non-fraud"),
            Self::Drop => f.write_str("drop"),
        }
    }
}

/// Everything a single pipeline run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Local path to the raw CSV export.
    pub input_path: PathBuf,
    /// Directory receiving the `train.<ext>` and `test.<ext>` tables.
    pub output_dir: PathBuf,
    /// Encoding for the two table artifacts.
    pub output_format: OutputFormat,
    /// Fraction of rows routed to the test set, in `[0, 1]`.
    pub test_fraction: f64,
    /// Column used to order rows before the split. `None` keeps file order.
    pub sort_key: Option<String>,
    /// Path for the reference statistics document.
    pub stats_path: PathBuf,
    /// Handling of rows whose label fails numeric parsing.
    pub on_bad_label: BadLabelPolicy,
}
