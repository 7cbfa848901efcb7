//! Bundle command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::bundle::bundle;
use crate::config::BundleOptions;
use crate::domain::BundleResult;

#[derive(Args)]
pub struct BundleArgs {
    /// Output file path
    #[arg(short, long, value_name = "PATH", env = "BUNDLE_OUTPUT", required = true)]
    pub output: Option<PathBuf>,

    /// Programming language: csharp, python, java, javascript, or 'all' for all files
    #[arg(short, long, value_name = "LANG", env = "BUNDLE_LANGUAGE", required = true)]
    pub language: Option<String>,

    /// Include source code paths as comments in the bundle
    #[arg(short, long)]
    pub note: bool,

    /// Sort files by 'name' (default), 'type' or 'none'
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Remove empty lines from the source code
    #[arg(short, long)]
    pub remove_empty_lines: bool,

    /// Name of the file creator
    #[arg(short, long, value_name = "NAME", env = "BUNDLE_AUTHOR")]
    pub author: Option<String>,

    /// Directory to bundle (defaults to the current directory)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Include files in subdirectories
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// How to print the result
    #[arg(long, value_enum, default_value = "text")]
    pub format: ResultFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ResultFormat {
    Text,
    Json,
}

pub fn run(args: BundleArgs) -> Result<ExitCode> {
    let options = BundleOptions {
        output: args.output,
        language: args.language,
        note: args.note,
        sort: args.sort,
        remove_empty_lines: args.remove_empty_lines,
        author: args.author,
        source_dir: args.dir,
        recursive: args.recursive,
    };

    let result = match options.build() {
        Ok(config) => bundle(&config),
        Err(err) => BundleResult::failure(&err),
    };

    print_result(&result, args.format)?;

    Ok(if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_result(result: &BundleResult, format: ResultFormat) -> Result<()> {
    match format {
        ResultFormat::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize bundle result")?;
            println!("{json}");
        }
        ResultFormat::Text if result.is_success() => {
            println!("{}", result.message);
            println!("{}", style("File created").green());
        }
        ResultFormat::Text => {
            println!("{}", style(&result.message).red());
        }
    }
    Ok(())
}
