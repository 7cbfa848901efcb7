//! Command-line interface for file-bundler
//!
//! Provides `bundle`, `create-rsp` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::rsp::expand_args;

mod bundle;
mod completions;
mod create_rsp;

/// Bundle the source files of a directory into a single file
#[derive(Parser)]
#[command(name = "file-bundler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Arguments of the form @FILE are replaced by the contents of FILE.")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle code files into one output file
    Bundle(bundle::BundleArgs),

    /// Create a response file with the bundle command options
    CreateRsp(create_rsp::CreateRspArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<ExitCode> {
    let args = match expand_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let cli = Cli::parse_from(args);

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Bundle(args) => bundle::run(args),
        Commands::CreateRsp(args) => create_rsp::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}
