//! Response files
//!
//! A response file captures a set of `bundle` options, one `--flag "value"`
//! per line, so the same bundle can be replayed with
//! `file-bundler bundle @bundleCommand.rsp`.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{LanguageFilter, SortKey};
use crate::error::{BundleError, Result};

pub mod prompt;

pub use prompt::{collect_options, LinePrompter, TermPrompter};

/// Options captured for a response file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RspOptions {
    pub output: String,
    pub language: String,
    pub note: bool,
    pub sort: String,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl RspOptions {
    /// Apply the same checks `bundle` will apply on replay.
    pub fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            return Err(BundleError::InvalidOutputPath);
        }
        self.language.parse::<LanguageFilter>()?;
        if !self.sort.trim().is_empty() {
            self.sort.parse::<SortKey>()?;
        }
        Ok(())
    }

    /// Render the response file body. False flags and empty optional values
    /// are left out.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("--output {}", quote(&self.output)),
            format!("--language {}", quote(&self.language)),
        ];
        if self.note {
            lines.push("--note".to_string());
        }
        if !self.sort.is_empty() {
            lines.push(format!("--sort {}", quote(&self.sort)));
        }
        if self.remove_empty_lines {
            lines.push("--remove-empty-lines".to_string());
        }
        if !self.author.is_empty() {
            lines.push(format!("--author {}", quote(&self.author)));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Validate, then write the response file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        fs::write(path, self.render())
            .map_err(|source| BundleError::ResponseFile { path: path.to_path_buf(), source })
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Split a response file body into arguments.
///
/// Whitespace separates tokens, double quotes group them, `\"` and `\\` are
/// escapes (any other backslash is literal), and lines starting with `#` are
/// ignored.
pub fn tokenize(path: &Path, text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut current = String::new();
        let mut in_token = false;
        let mut in_quotes = false;
        let mut chars = trimmed.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.peek() {
                    Some(&next) if next == '"' || next == '\\' => {
                        current.push(next);
                        chars.next();
                        in_token = true;
                    }
                    _ => {
                        current.push('\\');
                        in_token = true;
                    }
                },
                '"' => {
                    in_quotes = !in_quotes;
                    in_token = true;
                }
                c if c.is_whitespace() && !in_quotes => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            }
        }

        if in_quotes {
            return Err(BundleError::ResponseFileSyntax {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: "unterminated quote".to_string(),
            });
        }
        if in_token {
            tokens.push(current);
        }
    }

    Ok(tokens)
}

/// Replace every `@path` argument with the tokens of that response file.
///
/// The program name (first argument) is never expanded. Nested references
/// are followed; a file that references itself is an error.
pub fn expand_args<I>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();
    let mut active = HashSet::new();

    for arg in args {
        expand_one(arg, &mut active, &mut expanded)?;
    }

    Ok(expanded)
}

fn expand_one(
    arg: OsString,
    active: &mut HashSet<PathBuf>,
    out: &mut Vec<OsString>,
) -> Result<()> {
    let path = match arg.to_str().and_then(|s| s.strip_prefix('@')) {
        Some(rest) if !rest.is_empty() => PathBuf::from(rest),
        _ => {
            out.push(arg);
            return Ok(());
        }
    };

    let text = fs::read_to_string(&path)
        .map_err(|source| BundleError::ResponseFile { path: path.clone(), source })?;
    let key = path.canonicalize().unwrap_or_else(|_| path.clone());
    if !active.insert(key.clone()) {
        return Err(BundleError::ResponseFileSyntax {
            path,
            line: 0,
            reason: "response file includes itself".to_string(),
        });
    }

    let tokens = tokenize(&path, &text)?;
    debug!(path = %path.display(), tokens = tokens.len(), "expanded response file");
    for token in tokens {
        expand_one(OsString::from(token), active, out)?;
    }

    active.remove(&key);
    Ok(())
}
