//! Text-likelihood classification of raw bodies.
//!
//! A body is shown as UTF-8 text only when the *whole* payload is valid UTF-8 under
//! the strict definition used by [`std::str::from_utf8`]: overlong encodings,
//! surrogate code points, code points above `U+10FFFF` and sequences truncated at the
//! end of the input are all invalid. A leading byte order mark is valid text and is
//! kept as `U+FEFF`. Anything else is shown in binary mode, which never loses bytes.

use crate::protocol::EncodingMode;

/// The classifier's verdict, with the position of the first invalid byte for binary
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary { valid_up_to: usize },
}

impl Classification {
    pub fn mode(&self) -> EncodingMode {
        match self {
            Classification::Text => EncodingMode::Utf8,
            Classification::Binary { .. } => EncodingMode::Binary,
        }
    }
}

/// Decides which [`EncodingMode`] `bytes` should be displayed in.
///
/// Pure, deterministic and linear in the input length. Empty input is text.
pub fn classify(bytes: &[u8]) -> EncodingMode {
    classify_with_reason(bytes).mode()
}

/// Like [`classify`], also reporting where the UTF-8 validation failed.
pub fn classify_with_reason(bytes: &[u8]) -> Classification {
    match std::str::from_utf8(bytes) {
        Ok(_) => Classification::Text,
        Err(e) => Classification::Binary { valid_up_to: e.valid_up_to() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_text() {
        assert_eq!(classify(b""), EncodingMode::Utf8);
    }

    #[test]
    fn test_ascii_and_multibyte_text() {
        assert_eq!(classify(br#"{"a":1}"#), EncodingMode::Utf8);
        assert_eq!(classify("héllo wörld ✓ 🦀".as_bytes()), EncodingMode::Utf8);
    }

    #[test]
    fn test_bom_is_text() {
        assert_eq!(classify(b"\xEF\xBB\xBFhello"), EncodingMode::Utf8);
    }

    #[test]
    fn test_invalid_bytes_are_binary() {
        assert_eq!(classify(&[0xFF, 0xFE]), EncodingMode::Binary);
        assert_eq!(classify_with_reason(b"abc\xFFdef"), Classification::Binary { valid_up_to: 3 });
    }

    #[test]
    fn test_overlong_and_surrogates_are_binary() {
        // overlong encoding of '/'
        assert_eq!(classify(&[0xC0, 0xAF]), EncodingMode::Binary);
        // encoded U+D800
        assert_eq!(classify(&[0xED, 0xA0, 0x80]), EncodingMode::Binary);
        // above U+10FFFF
        assert_eq!(classify(&[0xF4, 0x90, 0x80, 0x80]), EncodingMode::Binary);
    }

    #[test]
    fn test_truncated_sequence_is_binary() {
        let bytes = "ok ✓".as_bytes();
        let truncated = &bytes[..bytes.len() - 1];
        assert_eq!(classify_with_reason(truncated), Classification::Binary { valid_up_to: 3 });
    }

    #[test]
    fn test_deterministic() {
        let bytes = [0x00, 0x9F, 0x92, 0x96, 0x41];
        let first = classify_with_reason(&bytes);
        for _ in 0..8 {
            assert_eq!(classify_with_reason(&bytes), first);
        }
    }
}
