//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded dataset (`Dataset`, `Observation`)
//! - fit outputs (`OlsFit`, `Coefficient`)
//! - the resolved run configuration (`RunConfig`)

pub mod types;

pub use types::*;
