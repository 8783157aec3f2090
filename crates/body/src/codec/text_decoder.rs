use crate::classify::classify;
use crate::codec::DisplayText;
use crate::protocol::{DecodeError, EncodingMode};
use tracing::{debug, trace};

/// Decodes `bytes` as text using `mode`.
///
/// Never fails for [`EncodingMode::Binary`]. For [`EncodingMode::Utf8`], malformed
/// input is reported as [`DecodeError::InvalidUtf8`] rather than repaired.
pub fn decode(bytes: &[u8], mode: EncodingMode) -> Result<String, DecodeError> {
    match mode {
        EncodingMode::Utf8 => Ok(std::str::from_utf8(bytes)?.to_owned()),
        EncodingMode::Binary => Ok(decode_binary(bytes)),
    }
}

/// Maps every byte to the character with the same code point.
pub fn decode_binary(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Decodes as UTF-8, replacing invalid sequences with `U+FFFD`.
///
/// This is lossy: the replaced bytes cannot be recovered by encoding the result.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Renders `bytes` for display, choosing the mode with the classifier.
///
/// A UTF-8 decode failure falls back to binary mode and is never surfaced.
pub fn render(bytes: &[u8]) -> DisplayText {
    let mode = classify(bytes);
    match decode(bytes, mode) {
        Ok(text) => {
            trace!(len = bytes.len(), %mode, "rendered body");
            DisplayText::new(text, mode)
        }
        Err(e) => {
            debug!(cause = %e, "utf8 decode failed, falling back to binary");
            DisplayText::new(decode_binary(bytes), EncodingMode::Binary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(decode(b"", EncodingMode::Utf8).unwrap(), "");
        assert_eq!(decode(b"", EncodingMode::Binary).unwrap(), "");
    }

    #[test]
    fn test_binary_is_one_char_per_byte() {
        let text = decode(&[0xFF, 0xFE, 0x41], EncodingMode::Binary).unwrap();
        assert_eq!(text, "\u{FF}\u{FE}A");
        assert_eq!(text.chars().count(), 3);
    }

    #[test]
    fn test_binary_of_multibyte_text_is_not_utf8_decoding() {
        let text = decode("é".as_bytes(), EncodingMode::Binary).unwrap();
        assert_eq!(text, "\u{C3}\u{A9}");
    }

    #[test]
    fn test_utf8_reports_failure() {
        let err = decode(b"ab\xFFcd", EncodingMode::Utf8).unwrap_err();
        assert_eq!(err, DecodeError::invalid_utf8(2, Some(1)));
        assert!(!err.is_truncated());

        let err = decode(b"ab\xE2\x9C", EncodingMode::Utf8).unwrap_err();
        assert_eq!(err.valid_up_to(), 2);
        assert!(err.is_truncated());
    }

    #[test]
    fn test_lossy() {
        assert_eq!(decode_lossy(b"ab\xFFcd"), "ab\u{FFFD}cd");
    }

    #[test]
    fn test_render_falls_back_to_binary() {
        let display = render(&[0xFF, 0xFE]);
        assert_eq!(display.mode(), EncodingMode::Binary);
        assert_eq!(display.text(), "\u{FF}\u{FE}");

        let display = render(br#"{"a":1}"#);
        assert_eq!(display.mode(), EncodingMode::Utf8);
        assert_eq!(display.text(), r#"{"a":1}"#);
    }
}
