//! # Fraudprep
//!
//! Prepares labeled transaction exports for fraud-detection training and
//! computes the reference statistics the serving layer uses to detect
//! feature drift.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fraudprep::config::{BadLabelPolicy, OutputFormat, PipelineConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = PipelineConfig {
//!     input_path: "data/raw/creditcard.csv".into(),
//!     output_dir: "data/processed".into(),
//!     output_format: OutputFormat::Parquet,
//!     test_fraction: 0.2,
//!     sort_key: Some("id".to_owned()),
//!     stats_path: "models/reference_stats.json".into(),
//!     on_bad_label: BadLabelPolicy::default(),
//! };
//! let summary = fraudprep::pipeline::run(&config)?;
//! println!("train={} test={}", summary.n_train, summary.n_test);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: the preparation stages and the run orchestrator
//! - [`config`]: the configuration surface of one run
//! - [`error`]: fatal error taxonomy
//! - [`logging`]: tracing initialization for the CLI
//!
//! ## Guarantees
//!
//! The train/test split is a boundary split of a stably sorted sequence;
//! identical input and configuration always produce identical partitions.
//! Reference statistics use one fixed quantile interpolation and serialize
//! with deterministic key order, so two documents from different training
//! epochs can be diffed directly.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
