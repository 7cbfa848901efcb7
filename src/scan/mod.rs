//! File discovery and ordering
//!
//! Enumerates the working set for a bundle: regular files in the source
//! directory (optionally recursive), minus build-output directories and the
//! bundle's own output file.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::{SortKey, SourceFile, EXCLUDED_SEGMENTS};
use crate::error::{BundleError, Result};
use crate::utils::normalize_path;

pub struct FileScanner {
    root: PathBuf,
    recursive: bool,
    excluded: GlobSet,
    skip_paths: Vec<PathBuf>,
}

impl FileScanner {
    /// Scanner over `root` with the default build-output exclusions.
    pub fn new(root: PathBuf) -> Result<Self> {
        Ok(Self {
            root,
            recursive: false,
            excluded: build_exclusions(EXCLUDED_SEGMENTS)?,
            skip_paths: Vec::new(),
        })
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Never report this file, e.g. the bundle being written.
    pub fn skip_path(mut self, path: PathBuf) -> Self {
        self.skip_paths.push(path);
        self
    }

    /// Enumerate files in discovery order.
    ///
    /// Entries are visited sorted by file name within each directory, so the
    /// order is reproducible between runs.
    pub fn scan(&self) -> Result<Vec<SourceFile>> {
        if !self.root.is_dir() {
            return Err(BundleError::SourceDirNotFound { path: self.root.clone() });
        }
        let root = self.root.canonicalize().map_err(|_| BundleError::SourceDirNotFound {
            path: self.root.clone(),
        })?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && is_excluded_dir(e.file_name())));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            // Symlinks count when they resolve to a regular file.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let relative_path = normalize_path(relative);

            // Matched on the full path: a source directory that itself sits
            // under a build-output directory contributes nothing.
            if self.excluded.is_match(entry.path()) {
                debug!(path = %relative_path, "excluded build output");
                continue;
            }
            if self.skip_paths.iter().any(|skip| skip == entry.path()) {
                debug!(path = %relative_path, "skipped bundle output file");
                continue;
            }

            debug!(path = %relative_path, "discovered");
            files.push(SourceFile::new(entry.path().to_path_buf(), relative_path));
        }

        Ok(files)
    }
}

fn is_excluded_dir(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| EXCLUDED_SEGMENTS.contains(&n))
}

/// Globs matching any path that has one of `segments` as a directory.
fn build_exclusions(segments: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for segment in segments {
        builder.add(Glob::new(&format!("**/{segment}/**"))?);
    }
    Ok(builder.build()?)
}

/// Order files for output. Every key falls back to the relative path so
/// equal keys never depend on discovery accidents.
pub fn sort_files(files: &mut [SourceFile], key: SortKey) {
    match key {
        SortKey::Name => files.sort_by(by_name),
        SortKey::Type => {
            files.sort_by(|a, b| a.extension.cmp(&b.extension).then_with(|| by_name(a, b)))
        }
        // Discovery order is already name-sorted per directory.
        SortKey::None => {}
    }
}

fn by_name(a: &SourceFile, b: &SourceFile) -> Ordering {
    a.file_name.cmp(&b.file_name).then_with(|| a.relative_path.cmp(&b.relative_path))
}

/// Resolve `path` to an absolute path without requiring it to exist.
pub fn absolute_path(path: &Path) -> PathBuf {
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
        if let Ok(resolved) = parent.canonicalize() {
            return resolved.join(name);
        }
    }
    std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
}
