//! Shared "fit pipeline" logic: load the dataset, then fit it.
//!
//! Presentation (printing, export) stays in `app::run`, so the pipeline can be
//! exercised directly from tests.

use crate::domain::{Dataset, OlsFit, RunConfig};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub fit: OlsFit,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    let dataset = crate::io::ingest::load_dataset(&config.data_path)?;
    run_fit_with_dataset(dataset)
}

/// Fit an already loaded dataset.
pub fn run_fit_with_dataset(dataset: Dataset) -> Result<RunOutput, AppError> {
    log::info!("fitting sales ~ TV + radio + newspaper on {} rows", dataset.len());
    let fit = crate::fit::fit_ols(&dataset)?;
    Ok(RunOutput { dataset, fit })
}
