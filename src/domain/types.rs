//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built once by the loader and read by the fitter
//! - formatted for the terminal
//! - exported to JSON

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Predictor columns in design-matrix order (after the intercept).
pub const PREDICTORS: [&str; 3] = ["TV", "radio", "newspaper"];

/// Response column.
pub const RESPONSE: &str = "sales";

/// Label of the intercept coefficient.
pub const INTERCEPT: &str = "const";

/// One row of the advertising dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub tv: f64,
    pub radio: f64,
    pub newspaper: f64,
    pub sales: f64,
}

impl Observation {
    pub fn new(tv: f64, radio: f64, newspaper: f64, sales: f64) -> Self {
        Self {
            tv,
            radio,
            newspaper,
            sales,
        }
    }

    /// Predictor values in `PREDICTORS` order.
    pub fn predictors(&self) -> [f64; 3] {
        [self.tv, self.radio, self.newspaper]
    }
}

/// The loaded dataset. Row order matches the input file.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the rows came from (file path or a reader label).
    pub source: String,
    rows: Vec<Observation>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, rows: Vec<Observation>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Per-coefficient inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

/// Result of an OLS fit.
///
/// `p` counts design columns including the intercept; degrees of freedom use it
/// even when a zero predictor column was excluded from the solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OlsFit {
    pub n: usize,
    pub p: usize,
    pub coefficients: Vec<Coefficient>,
    #[serde(skip)]
    pub fitted: Vec<f64>,
    #[serde(skip)]
    pub residuals: Vec<f64>,
    /// Sum of squared residuals.
    pub ssr: f64,
    /// Total sum of squares around the mean response.
    pub sst: f64,
    pub rse: f64,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
}

impl OlsFit {
    /// Coefficient estimates, intercept first.
    pub fn betas(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.estimate).collect()
    }

    pub fn df_resid(&self) -> usize {
        self.n.saturating_sub(self.p)
    }

    pub fn df_model(&self) -> usize {
        self.p.saturating_sub(1)
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, the environment and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    /// Print the coefficient summary after the three headline lines.
    pub summary: bool,
    /// Fixed decimal places; `None` uses the shortest round-trip display.
    pub precision: Option<usize>,
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_of_freedom_do_not_underflow_on_imported_fits() {
        let json = r#"{
            "n": 2, "p": 4, "coefficients": [],
            "ssr": 0.0, "sst": 0.0, "rse": 0.0, "r_squared": 1.0, "adj_r_squared": 1.0,
            "f_statistic": 0.0, "f_p_value": 1.0, "log_likelihood": 0.0, "aic": 0.0, "bic": 0.0
        }"#;
        let fit: OlsFit = serde_json::from_str(json).unwrap();
        assert_eq!(fit.df_resid(), 0);
        assert_eq!(fit.df_model(), 3);
        assert!(fit.residuals.is_empty());
    }
}
