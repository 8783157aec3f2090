use crate::protocol::ContentType;
use std::str::Utf8Error;
use thiserror::Error;

/// Failure to decode bytes as text in the requested [`EncodingMode`](crate::protocol::EncodingMode).
///
/// Only the UTF-8 mode can fail; callers recover by falling back to binary mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid utf-8 sequence after {valid_up_to} valid bytes")]
    InvalidUtf8 { valid_up_to: usize, error_len: Option<usize> },
}

impl DecodeError {
    pub fn invalid_utf8(valid_up_to: usize, error_len: Option<usize>) -> Self {
        Self::InvalidUtf8 { valid_up_to, error_len }
    }

    /// Number of leading bytes which form valid UTF-8.
    pub fn valid_up_to(&self) -> usize {
        match self {
            Self::InvalidUtf8 { valid_up_to, .. } => *valid_up_to,
        }
    }

    /// `true` when the input ended in the middle of a multi-byte sequence, rather
    /// than containing an invalid byte.
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::InvalidUtf8 { error_len, .. } => error_len.is_none(),
        }
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(e: Utf8Error) -> Self {
        Self::invalid_utf8(e.valid_up_to(), e.error_len())
    }
}

/// Failure of a formatting attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("format rejected: {reason}")]
    Rejected { reason: String },

    #[error("no formatter available for content type {content_type}")]
    Unsupported { content_type: ContentType },

    #[error("format aborted: {reason}")]
    Aborted { reason: String },
}

impl FormatError {
    pub fn rejected<S: ToString>(str: S) -> Self {
        Self::Rejected { reason: str.to_string() }
    }

    pub fn unsupported(content_type: ContentType) -> Self {
        Self::Unsupported { content_type }
    }

    pub fn aborted<S: ToString>(str: S) -> Self {
        Self::Aborted { reason: str.to_string() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown content type: {name}")]
pub struct UnknownContentType {
    name: String,
}

impl UnknownContentType {
    pub fn new<S: ToString>(name: S) -> Self {
        Self { name: name.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
