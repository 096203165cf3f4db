//! Export fit diagnostics to JSON.
//!
//! The export is meant to be easy to consume from downstream scripts.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::OlsFit;
use crate::error::{AppError, EXIT_INPUT};

#[derive(Debug, Serialize)]
struct ExportFile<'a> {
    tool: &'static str,
    generated: DateTime<Local>,
    data: &'a str,
    fit: &'a OlsFit,
}

/// Write the fitted model's diagnostics to a JSON file.
pub fn write_fit_json(path: &Path, source: &str, fit: &OlsFit) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create export '{}': {e}", path.display())))?;

    let export = ExportFile {
        tool: "ad-ols",
        generated: Local::now(),
        data: source,
        fit,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write export JSON: {e}")))?;

    log::info!("wrote diagnostics to {}", path.display());
    Ok(())
}
