//! Building a validated `BundleConfig` from raw options
//!
//! Options arrive as loosely typed values from CLI flags, environment
//! variables or a replayed response file. `BundleOptions::build` is the single
//! place they are checked; the bundler itself only ever sees the result.

use std::path::PathBuf;

use crate::domain::{BundleConfig, LanguageFilter, SortKey};
use crate::error::{BundleError, Result};

#[derive(Debug, Default, Clone)]
pub struct BundleOptions {
    pub output: Option<PathBuf>,
    pub language: Option<String>,
    pub note: bool,
    pub sort: Option<String>,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
    pub source_dir: Option<PathBuf>,
    pub recursive: bool,
}

impl BundleOptions {
    /// Validate and freeze the options.
    ///
    /// The output path is checked first, then the language; neither check
    /// touches the filesystem.
    pub fn build(self) -> Result<BundleConfig> {
        let output_path = match self.output {
            Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path,
            _ => return Err(BundleError::InvalidOutputPath),
        };

        let language: LanguageFilter = match self.language.as_deref() {
            Some(value) => value.parse()?,
            None => return Err(BundleError::InvalidLanguage { value: String::new() }),
        };

        let sort = match non_blank(self.sort) {
            Some(value) => value.parse::<SortKey>()?,
            None => SortKey::default(),
        };

        let source_dir = self.source_dir.unwrap_or_else(|| PathBuf::from("."));

        Ok(BundleConfig {
            output_path,
            source_dir,
            language,
            include_source_notes: self.note,
            sort,
            strip_empty_lines: self.remove_empty_lines,
            author: non_blank(self.author),
            recursive: self.recursive,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
