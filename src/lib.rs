//! `ad-ols` library crate.
//!
//! The binary (`ad-ols`) is a thin wrapper around this library so that:
//!
//! - loading, fitting and formatting are testable without spawning processes
//! - the fit can be reused from other tools

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
