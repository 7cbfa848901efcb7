//! Text decoding for bundled files
//!
//! Source trees are not guaranteed to be UTF-8. A BOM wins when present,
//! valid UTF-8 is taken as-is, anything else goes through charset detection.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{BundleError, Result};

/// Decode raw bytes, returning the text and the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (text.into_owned(), encoding);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, used, _) = encoding.decode(bytes);
    (text.into_owned(), used)
}

/// Read a whole file as text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|source| BundleError::FileRead { path: path.to_path_buf(), source })?;
    let (text, encoding) = decode_bytes(&bytes);
    if encoding != UTF_8 {
        warn!(path = %path.display(), encoding = encoding.name(), "decoded non-UTF-8 file");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn plain_utf8_passes_through() {
        let (text, encoding) = decode_bytes("héllo\nworld\n".as_bytes());
        assert_eq!(text, "héllo\nworld\n");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let (text, encoding) = decode_bytes(b"\xEF\xBB\xBFline");
        assert_eq!(text, "line");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn utf16le_bom_is_decoded() {
        let (text, encoding) = decode_bytes(b"\xFF\xFEh\x00i\x00");
        assert_eq!(text, "hi");
        assert_eq!(encoding, encoding_rs::UTF_16LE);
    }

    #[test]
    fn invalid_utf8_falls_back_to_detection() {
        // "café" in windows-1252
        let (text, encoding) = decode_bytes(b"caf\xE9 au lait");
        assert_ne!(encoding, UTF_8);
        assert!(text.starts_with("caf"));
        assert!(text.ends_with(" au lait"));
    }

    #[test]
    fn read_text_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = read_text(&temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, BundleError::FileRead { .. }));
    }
}
