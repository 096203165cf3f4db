//! Model fitting.
//!
//! - `fitter`: design matrix construction, the OLS solve and the diagnostics
//!   derived from it

pub mod fitter;

pub use fitter::*;

/// Reasons a dataset cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    #[error("insufficient data: {n} rows for {p} parameters (need more rows than parameters)")]
    InsufficientData { n: usize, p: usize },
    #[error("singular design matrix: column `{column}` is a linear combination of earlier columns")]
    SingularMatrix { column: &'static str },
}
