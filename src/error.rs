//! Error types shared by the bundler and the response-file writer

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::LanguageFilter;

/// Broad class of a failure, used when reporting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Bad user input caught before touching the filesystem
    Validation,
    /// A directory was missing at enumeration or write time
    Filesystem,
    /// Reading or writing a file failed
    Io,
}

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Invalid output file path.")]
    InvalidOutputPath,

    #[error(
        "Invalid programming language. Please use 'all' or a valid language: {}",
        LanguageFilter::valid_names().join(", ")
    )]
    InvalidLanguage { value: String },

    #[error("Invalid sort key '{value}'. Please use 'name', 'type' or 'none'")]
    InvalidSortKey { value: String },

    #[error("Invalid file path")]
    SourceDirNotFound { path: PathBuf },

    #[error("Invalid file path")]
    OutputDirNotFound { path: PathBuf },

    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid exclusion pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("failed to access response file: {path}")]
    ResponseFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    ResponseFileSyntax { path: PathBuf, line: usize, reason: String },

    #[error("failed to read input: {0}")]
    Prompt(String),
}

impl BundleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOutputPath | Self::InvalidLanguage { .. } | Self::InvalidSortKey { .. } => {
                ErrorKind::Validation
            }
            Self::SourceDirNotFound { .. } | Self::OutputDirNotFound { .. } | Self::Walk(_) => {
                ErrorKind::Filesystem
            }
            Self::Glob(_) => ErrorKind::Validation,
            Self::FileRead { .. }
            | Self::FileWrite { .. }
            | Self::ResponseFile { .. }
            | Self::ResponseFileSyntax { .. }
            | Self::Prompt(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
