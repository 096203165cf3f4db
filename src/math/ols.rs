//! Ordinary least squares solver.
//!
//! We solve
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! with a Householder QR of the (tall) design matrix followed by back
//! substitution on `R β = Qᵀ y`. The QR factors are used explicitly because
//! nalgebra's `QR::solve` is intended for square systems.
//!
//! Rank is judged from the diagonal of `R`: a Householder QR without pivoting
//! leaves `|R_jj| ≈ 0` exactly when column `j` lies in the span of the columns
//! before it.
//!
//! Columns that are identically zero are left out of the factorization and get
//! a coefficient of exactly 0, which is what a minimum-norm solve would return.

use nalgebra::{DMatrix, DVector};

/// Relative threshold on `|R_jj| / max |R_ii|` below which a column is
/// considered linearly dependent.
const RANK_TOL: f64 = 1e-10;

/// Column `column` of the design matrix is a linear combination of earlier columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankDeficient {
    pub column: usize,
}

/// A least squares solution plus the factor needed for coefficient covariances.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    /// Coefficients for every design column (zero for excluded columns).
    pub beta: DVector<f64>,
    /// Indices of the columns that took part in the solve.
    pub active: Vec<usize>,
    /// `R⁻¹` of the active columns, so `(XᵀX)⁻¹ = R⁻¹ R⁻ᵀ`.
    pub r_inv: DMatrix<f64>,
}

impl LeastSquares {
    /// Unscaled covariance `(XᵀX)⁻¹` restricted to the active columns.
    pub fn unscaled_covariance(&self) -> DMatrix<f64> {
        &self.r_inv * self.r_inv.transpose()
    }
}

/// Solve a least squares problem using QR.
///
/// Returns the first dependent column if `x` does not have full column rank
/// (after dropping all-zero columns).
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<LeastSquares, RankDeficient> {
    let (n, p) = x.shape();
    let active: Vec<usize> = (0..p)
        .filter(|&j| x.column(j).iter().any(|&v| v != 0.0))
        .collect();

    if active.len() > n {
        return Err(RankDeficient { column: active[n] });
    }
    if active.is_empty() {
        return Ok(LeastSquares {
            beta: DVector::zeros(p),
            active,
            r_inv: DMatrix::zeros(0, 0),
        });
    }

    let xa = x.select_columns(&active);
    let k = active.len();

    let qr = xa.qr();
    let r = qr.r();
    let q = qr.q();

    let max_diag = r.diagonal().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    for j in 0..k {
        if !(r[(j, j)].abs() > RANK_TOL * max_diag) {
            return Err(RankDeficient { column: active[j] });
        }
    }

    let qty = q.transpose() * y;
    let beta_active = r
        .solve_upper_triangular(&qty)
        .ok_or(RankDeficient { column: active[k - 1] })?;
    let r_inv = r
        .solve_upper_triangular(&DMatrix::identity(k, k))
        .ok_or(RankDeficient { column: active[k - 1] })?;

    let mut beta = DVector::zeros(p);
    for (slot, &col) in active.iter().enumerate() {
        beta[col] = beta_active[slot];
    }

    Ok(LeastSquares { beta, active, r_inv })
}
