//! The bundler: discover, filter, order, read, transform and write.

use std::fs::File;
use std::io::{BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::domain::{BundleConfig, BundleResult, SourceFile};
use crate::error::{BundleError, Result};
use crate::render::{render_bundle, strip_empty_lines, RenderedFile};
use crate::scan::{absolute_path, sort_files, FileScanner};
use crate::utils::read_text;

/// Successful bundle run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub files_included: usize,
    pub message: String,
}

/// Run a bundle and fold any failure into the result.
pub fn bundle(config: &BundleConfig) -> BundleResult {
    match try_bundle(config) {
        Ok(summary) => BundleResult::success(
            summary.files_included,
            summary.message,
            config.output_path.clone(),
        ),
        Err(err) => {
            debug!(error = ?err, "bundle failed");
            BundleResult::failure(&err)
        }
    }
}

/// Run a bundle.
///
/// The whole output is rendered in memory before the destination is opened,
/// so a failed read never leaves a half-written bundle behind.
pub fn try_bundle(config: &BundleConfig) -> Result<BundleSummary> {
    let output = absolute_path(&config.output_path);

    let mut files = FileScanner::new(config.source_dir.clone())?
        .recursive(config.recursive)
        .skip_path(output.clone())
        .scan()?;
    let discovered = files.len();

    files.retain(|f| config.language.accepts(&f.extension));
    debug!(discovered, kept = files.len(), language = %config.language, "filtered files");

    sort_files(&mut files, config.sort);

    let rendered = read_files(&files, config.strip_empty_lines)?;
    let text = render_bundle(config.author.as_deref(), &rendered, config.include_source_notes);
    write_output(&config.output_path, &text)?;

    info!(
        output = %config.output_path.display(),
        files = files.len(),
        bytes = text.len(),
        "bundle written"
    );

    let message = if config.language.is_all() {
        format!("Including {} files.", files.len())
    } else {
        format!("Selected languages: {}. Including {} files.", config.language, files.len())
    };

    Ok(BundleSummary { files_included: files.len(), message })
}

fn read_files(files: &[SourceFile], strip: bool) -> Result<Vec<RenderedFile<'_>>> {
    files
        .iter()
        .map(|source| -> Result<RenderedFile> {
            let text = read_text(&source.path)?;
            let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
            if strip {
                lines = strip_empty_lines(lines);
            }
            Ok(RenderedFile { source, lines })
        })
        .collect()
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path).map_err(|source| {
        if source.kind() == IoErrorKind::NotFound {
            BundleError::OutputDirNotFound { path: path.to_path_buf() }
        } else {
            BundleError::FileWrite { path: path.to_path_buf(), source }
        }
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| BundleError::FileWrite { path: path.to_path_buf(), source })
}
