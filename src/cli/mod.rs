//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading/fitting code. Every flag is optional: a bare `ad-ols` analyses
//! `Advertising.csv` in the working directory.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ad-ols",
    version,
    about = "OLS diagnostics (RSE, R-squared, F-statistic) for advertising spend vs. sales"
)]
pub struct Cli {
    /// CSV file with `TV`, `radio`, `newspaper` and `sales` columns.
    ///
    /// Falls back to `AD_OLS_DATA` (environment or `.env`), then `Advertising.csv`.
    #[arg(long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Also print the regression summary (coefficients, p-values, AIC/BIC).
    #[arg(long)]
    pub summary: bool,

    /// Print the headline statistics with a fixed number of decimal places.
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Export the fit diagnostics to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
