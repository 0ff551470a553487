use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::error::ArtifactError;

#[derive(Debug)]
pub struct DecodedSource {
    pub text: String,
    pub encoding: &'static str,
    pub had_errors: bool,
}

pub fn read_source(path: &Path) -> Result<DecodedSource, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

/// BOM first, then plain UTF-8, then whatever chardetng guesses.
pub fn decode(bytes: &[u8]) -> DecodedSource {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedSource {
            text: text.into_owned(),
            encoding: encoding.name(),
            had_errors,
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedSource {
            text: text.to_string(),
            encoding: UTF_8.name(),
            had_errors: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    DecodedSource {
        text: text.into_owned(),
        encoding: encoding.name(),
        had_errors,
    }
}

/// First `budget` characters (not bytes).
pub fn char_prefix(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utf8_bom() {
        let d = decode(b"\xEF\xBB\xBFexport default App;");
        assert_eq!(d.text, "export default App;");
        assert_eq!(d.encoding, "UTF-8");
        assert!(!d.had_errors);
    }

    #[test]
    fn latin1_falls_back_to_detection() {
        // "café" in windows-1252
        let d = decode(b"const label = 'caf\xE9';");
        assert_ne!(d.encoding, "UTF-8");
        assert!(d.text.starts_with("const label = 'caf"));
        assert_eq!(d.text.chars().count(), 21);
    }

    #[test]
    fn prefix_counts_characters() {
        assert_eq!(char_prefix("♠♥♦♣", 2), "♠♥");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }
}
