//! Console logging for the pipeline CLI.
//!
//! Logs go to stderr so stdout stays reserved for the run summary and the
//! `stats` command output. The level defaults to `info` for this crate and
//! can be overridden with `RUST_LOG`.

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initializes the tracing subscriber. Call once at process start.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("fraudprep=info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    Ok(())
}
