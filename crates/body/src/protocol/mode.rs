use std::fmt;

/// The byte-to-character mapping used to show a body as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Standard UTF-8. Decoding invalid bytes in this mode is lossy.
    #[default]
    Utf8,

    /// One character per byte, the character's code point being the byte value
    /// (ISO-8859-1). Every byte sequence survives a decode/encode round trip.
    Binary,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Utf8 => "utf8",
            EncodingMode::Binary => "binary",
        }
    }

    #[inline]
    pub fn is_utf8(&self) -> bool {
        matches!(self, EncodingMode::Utf8)
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self, EncodingMode::Binary)
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
