//! Core domain types
//!
//! Defines the immutable `BundleConfig` consumed by the bundler, the
//! discovered `SourceFile` entries and the `BundleResult` handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{BundleError, ErrorKind};

/// Fixed line that marks the start of bundled content.
pub const MANIFEST_HEADER: &str = "Bundled files:";

/// Directory segments holding build output. Matched case-sensitively.
pub const EXCLUDED_SEGMENTS: &[&str] = &["bin", "debug"];

/// Default name of the response file written by `create-rsp`.
pub const RESPONSE_FILE_NAME: &str = "bundleCommand.rsp";

/// Which files a bundle draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFilter {
    Csharp,
    Python,
    Java,
    Javascript,
    All,
}

impl LanguageFilter {
    pub const ALL_VALUES: [LanguageFilter; 5] =
        [Self::Csharp, Self::Python, Self::Java, Self::Javascript, Self::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csharp => "csharp",
            Self::Python => "python",
            Self::Java => "java",
            Self::Javascript => "javascript",
            Self::All => "all",
        }
    }

    /// Recognized names in the order they are presented to users.
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL_VALUES.iter().map(|l| l.as_str()).collect()
    }

    /// Extensions (with leading dot) that belong to this language.
    /// `All` has no list because it accepts everything.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Csharp => &[".cs"],
            Self::Python => &[".py", ".pyw", ".pyi"],
            Self::Java => &[".java"],
            Self::Javascript => &[".js", ".mjs", ".cjs", ".jsx"],
            Self::All => &[],
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a file with this extension is part of the bundle.
    pub fn accepts(&self, extension: &str) -> bool {
        if self.is_all() {
            return true;
        }
        self.extensions().iter().any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageFilter {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL_VALUES
            .iter()
            .copied()
            .find(|l| l.as_str() == normalized)
            .ok_or_else(|| BundleError::InvalidLanguage { value: s.to_string() })
    }
}

/// Ordering applied to discovered files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Type,
    None,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "none" => Ok(Self::None),
            _ => Err(BundleError::InvalidSortKey { value: s.to_string() }),
        }
    }
}

/// Validated, immutable input to a single bundle run.
///
/// Built by [`crate::config::BundleOptions::build`]; never constructed from
/// unchecked strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleConfig {
    /// Destination file; never empty
    pub output_path: PathBuf,

    /// Directory whose files are bundled
    pub source_dir: PathBuf,

    pub language: LanguageFilter,

    /// Append a `// Source:` line after each file
    pub include_source_notes: bool,

    pub sort: SortKey,

    /// Drop blank and whitespace-only lines
    pub strip_empty_lines: bool,

    /// Leading `// Created by:` attribution
    pub author: Option<String>,

    /// Descend into subdirectories
    pub recursive: bool,
}

/// A file discovered in the working set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path
    pub path: PathBuf,

    /// Path relative to the source directory, forward slashes
    pub relative_path: String,

    /// Base name
    pub file_name: String,

    /// Extension with leading dot, empty when the file has none
    pub extension: String,
}

impl SourceFile {
    pub fn new(path: PathBuf, relative_path: String) -> Self {
        let file_name =
            path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Self { path, relative_path, file_name, extension }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleStatus {
    Success,
    Failure,
}

/// Outcome of a bundle run, ready for presentation by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleResult {
    pub files_included: usize,
    pub status: BundleStatus,
    pub message: String,

    /// Where the bundle was written, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    /// Class of the failure, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl BundleResult {
    pub fn success(files_included: usize, message: String, output_path: PathBuf) -> Self {
        Self {
            files_included,
            status: BundleStatus::Success,
            message,
            output_path: Some(output_path),
            error_kind: None,
        }
    }

    pub fn failure(error: &BundleError) -> Self {
        Self {
            files_included: 0,
            status: BundleStatus::Failure,
            message: error.to_string(),
            output_path: None,
            error_kind: Some(error.kind()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BundleStatus::Success
    }
}
