//! `filter-kernels` library crate.
//!
//! The binary (`fk`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod kernel;
pub mod math;
pub mod plot;
pub mod report;
