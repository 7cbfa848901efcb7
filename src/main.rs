//! file-bundler: concatenate source files into a single bundle
//!
//! Bundles every file in a directory (optionally filtered by language, sorted,
//! annotated and stripped of empty lines) into one output file, and writes
//! response files for replaying a bundle invocation.

use anyhow::Result;
use std::process::ExitCode;

mod bundle;
mod cli;
mod config;
mod domain;
mod error;
mod render;
mod rsp;
mod scan;
mod utils;

fn main() -> Result<ExitCode> {
    cli::run()
}
