//! Conversion between body bytes and editable text.
//!
//! The codec comes in pairs per [`EncodingMode`]:
//!
//! - [`EncodingMode::Binary`] maps each byte to the character with the same code point
//!   and back. Both directions are total and `encode(decode(b))` restores `b` exactly.
//! - [`EncodingMode::Utf8`] is plain UTF-8. Decoding malformed input reports a
//!   [`DecodeError`](crate::protocol::DecodeError) instead of substituting characters,
//!   so callers can fall back to binary mode; [`decode_lossy`] is available where a
//!   lossy rendering is acceptable.
//!
//! All functions are pure: there is no mode memory between calls.

mod text_decoder;
mod text_encoder;

pub use text_decoder::decode;
pub use text_decoder::decode_binary;
pub use text_decoder::decode_lossy;
pub use text_decoder::render;
pub use text_encoder::encode;

use crate::classify::classify;
use crate::protocol::{BodyBytes, DecodeError, EncodingMode};

/// A body rendered as text, along with the mode used to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    text: String,
    mode: EncodingMode,
}

impl DisplayText {
    pub fn new(text: String, mode: EncodingMode) -> Self {
        Self { text, mode }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn into_parts(self) -> (String, EncodingMode) {
        (self.text, self.mode)
    }
}

/// A codec bound to one [`EncodingMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    mode: EncodingMode,
}

impl TextCodec {
    pub fn new(mode: EncodingMode) -> Self {
        Self { mode }
    }

    pub fn utf8() -> Self {
        Self::new(EncodingMode::Utf8)
    }

    pub fn binary() -> Self {
        Self::new(EncodingMode::Binary)
    }

    /// Picks the codec the classifier chooses for `bytes`.
    pub fn for_bytes(bytes: &[u8]) -> Self {
        Self::new(classify(bytes))
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        decode(bytes, self.mode)
    }

    pub fn encode(&self, text: &str) -> BodyBytes {
        encode(text, self.mode)
    }
}
