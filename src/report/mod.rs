//! Reporting: headline diagnostics and the regression summary.

pub mod format;

pub use format::*;
