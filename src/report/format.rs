//! Terminal formatting for fit diagnostics.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use chrono::{DateTime, Local};

use crate::domain::{Coefficient, OlsFit};

/// Format the three headline statistics, one per line.
pub fn format_diagnostics(fit: &OlsFit, precision: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Residual Standard Error (RSE): {}\n",
        fmt_value(fit.rse, precision)
    ));
    out.push_str(&format!("R-squared: {}\n", fmt_value(fit.r_squared, precision)));
    out.push_str(&format!("F-statistic: {}\n", fmt_value(fit.f_statistic, precision)));
    out
}

/// Format the regression summary: model-level statistics plus a coefficient table.
pub fn format_summary(fit: &OlsFit, source: &str, generated: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("=== OLS Regression Results ===\n");
    out.push_str(&format!("Dep. Variable: sales | Data: {source}\n"));
    out.push_str(&format!("Date: {}\n", generated.format("%a, %d %b %Y %H:%M:%S")));
    out.push_str(&format!(
        "No. Observations: {} | Df Residuals: {} | Df Model: {}\n",
        fit.n,
        fit.df_resid(),
        fit.df_model()
    ));
    out.push_str(&format!(
        "R-squared: {:.3} | Adj. R-squared: {:.3}\n",
        fit.r_squared, fit.adj_r_squared
    ));
    out.push_str(&format!(
        "F-statistic: {:.2} | Prob (F-statistic): {:.3e}\n",
        fit.f_statistic, fit.f_p_value
    ));
    out.push_str(&format!(
        "Log-Likelihood: {:.3} | AIC: {:.1} | BIC: {:.1}\n",
        fit.log_likelihood, fit.aic, fit.bic
    ));
    out.push('\n');
    out.push_str(&format_coefficients(&fit.coefficients));

    out
}

fn format_coefficients(rows: &[Coefficient]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>10} {:>10}\n",
        "", "coef", "std err", "t", "P>|t|"
    ));
    out.push_str(&format!(
        "{:-<12} {:-<12} {:-<12} {:-<10} {:-<10}\n",
        "", "", "", "", ""
    ));

    for c in rows {
        out.push_str(
            format!(
                "{:<12} {:>12.4} {:>12.4} {:>10.3} {:>10.3}\n",
                c.name, c.estimate, c.std_error, c.t_value, c.p_value
            )
            .as_str(),
        );
    }
    out
}

fn fmt_value(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{v:.digits$}"),
        None => format!("{v}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_fit() -> OlsFit {
        let coef = |name: &str, estimate: f64, std_error: f64| Coefficient {
            name: name.to_string(),
            estimate,
            std_error,
            t_value: estimate / std_error,
            p_value: 0.01,
        };
        OlsFit {
            n: 200,
            p: 4,
            coefficients: vec![
                coef("const", 2.9389, 0.3119),
                coef("TV", 0.0458, 0.0014),
                coef("radio", 0.1885, 0.0086),
                coef("newspaper", -0.001, 0.0059),
            ],
            fitted: Vec::new(),
            residuals: Vec::new(),
            ssr: 556.8,
            sst: 5417.1,
            rse: 1.6855,
            r_squared: 0.8972,
            adj_r_squared: 0.8956,
            f_statistic: 570.27,
            f_p_value: 1.58e-96,
            log_likelihood: -386.18,
            aic: 780.4,
            bic: 793.6,
        }
    }

    #[test]
    fn diagnostics_are_three_labelled_lines() {
        let text = format_diagnostics(&sample_fit(), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Residual Standard Error (RSE): 1.6855",
                "R-squared: 0.8972",
                "F-statistic: 570.27",
            ]
        );
    }

    #[test]
    fn fixed_precision_is_applied_to_every_value() {
        let text = format_diagnostics(&sample_fit(), Some(2));
        assert!(text.contains("(RSE): 1.69\n"));
        assert!(text.contains("R-squared: 0.90\n"));
        assert!(text.contains("F-statistic: 570.27\n"));
    }

    #[test]
    fn infinite_f_statistic_is_printed() {
        let mut fit = sample_fit();
        fit.f_statistic = f64::INFINITY;
        assert!(format_diagnostics(&fit, None).ends_with("F-statistic: inf\n"));
    }

    #[test]
    fn summary_lists_every_coefficient() {
        let generated = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let text = format_summary(&sample_fit(), "Advertising.csv", generated);

        assert!(text.contains("Data: Advertising.csv"));
        assert!(text.contains("Date: Fri, 02 Jan 2026 03:04:05"));
        assert!(text.contains("No. Observations: 200 | Df Residuals: 196 | Df Model: 3"));
        for name in ["const", "TV", "radio", "newspaper"] {
            assert!(text.lines().any(|l| l.starts_with(name)), "missing row for {name}");
        }
    }
}
