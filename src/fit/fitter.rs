//! OLS fitting of `sales ~ TV + radio + newspaper`.
//!
//! Given a dataset we:
//! - build the design matrix `X = [1 | TV | radio | newspaper]` and `y = sales`
//! - solve for β by QR least squares
//! - derive RSE, R², the F-statistic and the per-coefficient inference
//!
//! With `n` rows and `p = 4` design columns:
//!
//! ```text
//! RSE = sqrt(SSR / (n - p))
//! R²  = 1 - SSR / SST
//! F   = ((SST - SSR) / (p - 1)) / (SSR / (n - p))
//! ```

use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::domain::{Coefficient, Dataset, INTERCEPT, OlsFit, PREDICTORS};
use crate::fit::FitError;
use crate::math::solve_least_squares;

/// Design columns: intercept plus one per predictor.
pub const N_PARAMS: usize = PREDICTORS.len() + 1;

/// SST at or below this fraction of `‖y‖²` is treated as exactly zero.
const SST_ZERO_TOL: f64 = 1e-24;

/// Name of design column `idx`.
pub fn column_name(idx: usize) -> &'static str {
    match idx {
        0 => INTERCEPT,
        _ => PREDICTORS[idx - 1],
    }
}

/// Build `X` (intercept first) and `y` from the dataset, preserving row order.
pub fn design_matrix(dataset: &Dataset) -> (DMatrix<f64>, DVector<f64>) {
    let rows = dataset.rows();
    let x = DMatrix::from_fn(rows.len(), N_PARAMS, |i, j| match j {
        0 => 1.0,
        _ => rows[i].predictors()[j - 1],
    });
    let y = DVector::from_iterator(rows.len(), rows.iter().map(|r| r.sales));
    (x, y)
}

/// Fit the model and compute its diagnostics.
pub fn fit_ols(dataset: &Dataset) -> Result<OlsFit, FitError> {
    let n = dataset.len();
    let p = N_PARAMS;
    if n <= p {
        return Err(FitError::InsufficientData { n, p });
    }

    let (x, y) = design_matrix(dataset);
    let solution = solve_least_squares(&x, &y).map_err(|e| FitError::SingularMatrix {
        column: column_name(e.column),
    })?;
    if solution.active.len() < p {
        log::debug!(
            "excluded all-zero columns from the solve: {:?}",
            (0..p)
                .filter(|j| !solution.active.contains(j))
                .map(column_name)
                .collect::<Vec<_>>()
        );
    }

    let fitted = &x * &solution.beta;
    let residuals = &y - &fitted;

    let ssr: f64 = residuals.iter().map(|e| e * e).sum();
    let y_mean = y.mean();
    let sst_raw: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
    // Rounding in the mean leaves a constant response with SST at noise level.
    let sst = if sst_raw <= SST_ZERO_TOL * y.norm_squared() {
        0.0
    } else {
        sst_raw
    };

    let nf = n as f64;
    let df_resid = (n - p) as f64;
    let df_model = (p - 1) as f64;

    let mse = ssr / df_resid;
    let rse = mse.sqrt();

    let explained = (sst - ssr).max(0.0);

    // A constant response has nothing left to explain.
    let r_squared = if sst > 0.0 {
        (explained / sst).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (nf - 1.0) / df_resid;

    let f_statistic = if explained > 0.0 {
        (explained / df_model) / mse
    } else {
        0.0
    };
    let f_p_value = f_survival(f_statistic, df_model, df_resid);

    let covariance = solution.unscaled_covariance() * mse;
    let coefficients = (0..p)
        .map(|j| {
            let estimate = solution.beta[j];
            let std_error = match solution.active.iter().position(|&c| c == j) {
                Some(pos) => covariance[(pos, pos)].max(0.0).sqrt(),
                None => f64::NAN,
            };
            let t_value = estimate / std_error;
            Coefficient {
                name: column_name(j).to_string(),
                estimate,
                std_error,
                t_value,
                p_value: t_two_sided(t_value, df_resid),
            }
        })
        .collect();

    let log_likelihood = -nf / 2.0 * ((2.0 * std::f64::consts::PI).ln() + (ssr / nf).ln() + 1.0);
    let aic = -2.0 * log_likelihood + 2.0 * p as f64;
    let bic = -2.0 * log_likelihood + p as f64 * nf.ln();

    log::debug!("fitted n={n} p={p}: ssr={ssr} sst={sst} rse={rse} r2={r_squared} f={f_statistic}");

    Ok(OlsFit {
        n,
        p,
        coefficients,
        fitted: fitted.iter().copied().collect(),
        residuals: residuals.iter().copied().collect(),
        ssr,
        sst,
        rse,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        log_likelihood,
        aic,
        bic,
    })
}

/// `P(F > f)` for `F ~ F(d1, d2)`.
fn f_survival(f: f64, d1: f64, d2: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    if f.is_infinite() {
        return 0.0;
    }
    FisherSnedecor::new(d1, d2).map(|d| d.sf(f)).unwrap_or(f64::NAN)
}

/// Two-sided `P(|T| > |t|)` for `T ~ t(df)`.
fn t_two_sided(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    StudentsT::new(0.0, 1.0, df)
        .map(|d| (2.0 * d.sf(t.abs())).min(1.0))
        .unwrap_or(f64::NAN)
}
