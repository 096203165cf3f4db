//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves the run configuration
//! - loads the dataset and fits the model
//! - prints the diagnostics
//! - writes the optional export

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Environment variable naming the input CSV when `--data` is not given.
pub const DATA_ENV: &str = "AD_OLS_DATA";

/// Input CSV used when neither `--data` nor `AD_OLS_DATA` is set.
pub const DEFAULT_DATA_PATH: &str = "Advertising.csv";

/// Entry point for the `ad-ols` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = run_config_from_args(&cli, std::env::var(DATA_ENV).ok());

    let run = pipeline::run_fit(&config)?;

    // Nothing is printed until the fit has succeeded.
    print!(
        "{}",
        crate::report::format_diagnostics(&run.fit, config.precision)
    );
    if config.summary {
        println!();
        print!(
            "{}",
            crate::report::format_summary(&run.fit, &run.dataset.source, Local::now())
        );
    }

    if let Some(path) = &config.export {
        crate::io::export::write_fit_json(path, &run.dataset.source, &run.fit)?;
    }

    Ok(())
}

/// Resolve the data path: CLI flag, then environment, then the default file.
pub fn run_config_from_args(cli: &Cli, env_data: Option<String>) -> RunConfig {
    let data_path = cli
        .data
        .clone()
        .or_else(|| env_data.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    RunConfig {
        data_path,
        summary: cli.summary,
        precision: cli.precision,
        export: cli.export.clone(),
    }
}
