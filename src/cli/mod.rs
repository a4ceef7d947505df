//! Command Line Interface (CLI) layer for jpg2raw.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that wires user-provided options to `jpg2raw::api`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
