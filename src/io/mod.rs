//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - fit diagnostics export (JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
