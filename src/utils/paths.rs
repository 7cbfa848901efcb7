//! Path helpers

use std::path::{Component, Path};

/// Render a relative path with forward slashes, dropping `.` components.
///
/// Glob matching and source notes rely on this being stable across platforms.
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn joins_components_with_forward_slashes() {
        let path: PathBuf = ["src", "bin", "main.rs"].iter().collect();
        assert_eq!(normalize_path(&path), "src/bin/main.rs");
    }

    #[test]
    fn drops_current_dir_components() {
        assert_eq!(normalize_path(Path::new("./a/./b.txt")), "a/b.txt");
    }
}
