use crate::fit::FitError;
use crate::io::ingest::DataLoadError;

/// Exit code for input problems (missing file, bad schema, bad values, export failures).
pub const EXIT_INPUT: u8 = 2;
/// Exit code when there are too few rows to estimate the model.
pub const EXIT_INSUFFICIENT_DATA: u8 = 3;
/// Exit code when the design matrix is rank-deficient.
pub const EXIT_SINGULAR: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DataLoadError> for AppError {
    fn from(err: DataLoadError) -> Self {
        AppError::new(EXIT_INPUT, format!("Data load error: {err}"))
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::InsufficientData { .. } => EXIT_INSUFFICIENT_DATA,
            FitError::SingularMatrix { .. } => EXIT_SINGULAR,
        };
        AppError::new(exit_code, format!("Fit error: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_errors_map_to_distinct_exit_codes() {
        let insufficient: AppError = FitError::InsufficientData { n: 4, p: 4 }.into();
        let singular: AppError = FitError::SingularMatrix { column: "radio" }.into();
        assert_eq!(insufficient.exit_code(), EXIT_INSUFFICIENT_DATA);
        assert_eq!(singular.exit_code(), EXIT_SINGULAR);
        assert!(singular.to_string().contains("radio"));
    }

    #[test]
    fn load_errors_are_input_errors() {
        let err: AppError = DataLoadError::MissingColumn("sales").into();
        assert_eq!(err.exit_code(), EXIT_INPUT);
        assert!(err.to_string().contains("sales"));
    }
}
