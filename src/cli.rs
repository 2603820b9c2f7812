use anyhow::Result;
use clap::{Parser, Subcommand};
use fraudprep::config::{BadLabelPolicy, OutputFormat, PipelineConfig};
use fraudprep::pipeline;
use fraudprep::pipeline::stats::DEFAULT_STAT_COLUMNS;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fraudprep",
    about = "Transaction data preparation and reference statistics for fraud detection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a raw transaction export, split it and write training artifacts
    Prepare {
        /// Path to the raw CSV export
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the train/test tables
        #[arg(short, long, default_value = "data/processed")]
        out_dir: PathBuf,

        /// Output table format (parquet or csv)
        #[arg(long, default_value = "parquet")]
        format: OutputFormat,

        /// Fraction of rows routed to the test set, in [0, 1]
        #[arg(long, default_value_t = 0.2)]
        test_fraction: f64,

        /// Column to order rows by before the split. Empty keeps file order.
        #[arg(long, default_value = "id")]
        sort_col: String,

        /// Where to write the reference statistics document
        #[arg(long, default_value = "models/reference_stats.json")]
        stats_path: PathBuf,

        /// Handling of rows whose label fails numeric parsing
        #[arg(long, default_value_t = BadLabelPolicy::DefaultNonFraud)]
        on_bad_label: BadLabelPolicy,
    },
    /// Compute a reference statistics document for an existing table
    Stats {
        /// Path to a prepared table (csv or parquet)
        #[arg(short, long)]
        input: PathBuf,

        /// Comma-separated columns to summarize
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_STAT_COLUMNS.map(String::from))]
        columns: Vec<String>,

        /// Optional output path. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Prepare {
            input,
            out_dir,
            format,
            test_fraction,
            sort_col,
            stats_path,
            on_bad_label,
        } => handle_prepare(
            input,
            out_dir,
            format,
            test_fraction,
            sort_col,
            stats_path,
            on_bad_label,
        ),
        Commands::Stats {
            input,
            columns,
            output,
        } => handle_stats(&input, &columns, output),
    }
}

fn handle_prepare(
    input: PathBuf,
    out_dir: PathBuf,
    format: OutputFormat,
    test_fraction: f64,
    sort_col: String,
    stats_path: PathBuf,
    on_bad_label: BadLabelPolicy,
) -> Result<()> {
    let sort_key = {
        let trimmed = sort_col.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    };

    let config = PipelineConfig {
        input_path: input,
        output_dir: out_dir,
        output_format: format,
        test_fraction,
        sort_key,
        stats_path,
        on_bad_label,
    };

    let summary = pipeline::run(&config)?;

    println!(
        "OK | train={} | test={} | fraud_rate_train={:.6}",
        summary.n_train, summary.n_test, summary.fraud_rate
    );
    println!("Saved: {}", summary.train_path.display());
    println!("Saved: {}", summary.test_path.display());
    println!("Saved: {}", summary.stats_path.display());
    Ok(())
}

fn handle_stats(input: &Path, columns: &[String], output: Option<PathBuf>) -> Result<()> {
    let df = pipeline::io::load_table(input)?;
    let cols: Vec<&str> = columns.iter().map(String::as_str).collect();
    let reference = pipeline::stats::build_reference_stats(&df, &cols)?;

    match output {
        Some(path) => {
            pipeline::io::save_stats(&reference, &path)?;
            println!("Saved: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&reference)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
