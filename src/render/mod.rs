//! Bundle text assembly

use std::fmt::Write as _;

use crate::domain::{SourceFile, MANIFEST_HEADER};

/// One file's contribution to the bundle
#[derive(Debug, Clone)]
pub struct RenderedFile<'a> {
    pub source: &'a SourceFile,
    pub lines: Vec<String>,
}

/// Drop lines that are empty or whitespace-only, keeping the rest in order.
pub fn strip_empty_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.trim().is_empty()).collect()
}

pub fn source_note(file: &SourceFile) -> String {
    format!("// Source: {} - {}", file.file_name, file.path.display())
}

/// Render the complete bundle.
///
/// Layout: optional `// Created by:` line, the manifest header, then every
/// file's lines in order, each block optionally followed by its source note.
pub fn render_bundle(author: Option<&str>, files: &[RenderedFile<'_>], notes: bool) -> String {
    let mut out = String::new();

    if let Some(author) = author {
        let _ = writeln!(out, "// Created by: {author}");
    }
    out.push_str(MANIFEST_HEADER);
    out.push('\n');

    for file in files {
        for line in &file.lines {
            out.push_str(line);
            out.push('\n');
        }
        if notes {
            out.push_str(&source_note(file.source));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_only_when_no_files() {
        assert_eq!(render_bundle(None, &[], true), "Bundled files:\n");
        assert_eq!(
            render_bundle(Some("Ada"), &[], false),
            "// Created by: Ada\nBundled files:\n"
        );
    }

    #[test]
    fn notes_follow_each_block() {
        let a = SourceFile::new(PathBuf::from("/w/a.py"), "a.py".into());
        let b = SourceFile::new(PathBuf::from("/w/b.py"), "b.py".into());
        let files = vec![
            RenderedFile { source: &a, lines: lines(&["x = 1", "y = 2"]) },
            RenderedFile { source: &b, lines: lines(&["z = 3"]) },
        ];
        let out = render_bundle(None, &files, true);
        assert_eq!(
            out,
            "Bundled files:\nx = 1\ny = 2\n// Source: a.py - /w/a.py\nz = 3\n// Source: b.py - /w/b.py\n"
        );
    }

    #[test]
    fn stripping_never_reorders() {
        let input = lines(&["first", "", "   ", "second", "\t", "third"]);
        let stripped = strip_empty_lines(input.clone());
        assert_eq!(stripped, lines(&["first", "second", "third"]));
        assert!(stripped.len() <= input.len());
    }
}
