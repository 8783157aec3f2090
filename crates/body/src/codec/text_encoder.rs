use crate::protocol::{BodyBytes, EncodingMode};
use bytes::{BufMut, BytesMut};

/// Encodes `text` into body bytes using `mode`. Never fails.
///
/// In [`EncodingMode::Binary`] each character becomes the low byte of its code point.
/// Characters above `U+00FF` cannot come out of a binary decode; if an edit introduces
/// them they are truncated, which is lossy.
pub fn encode(text: &str, mode: EncodingMode) -> BodyBytes {
    match mode {
        EncodingMode::Utf8 => BodyBytes::from(text.to_owned()),
        EncodingMode::Binary => encode_binary(text),
    }
}

fn encode_binary(text: &str) -> BodyBytes {
    // at most one byte per utf-8 byte
    let mut buf = BytesMut::with_capacity(text.len());
    for c in text.chars() {
        let [low, ..] = u32::from(c).to_le_bytes();
        buf.put_u8(low);
    }
    buf.freeze().into()
}
