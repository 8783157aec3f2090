//! Core types of the body editing engine.
//!
//! - [`BodyBytes`]: the authoritative payload, replaced wholesale on every edit
//! - [`EncodingMode`]: how bytes map to characters for display
//! - [`ContentType`]: descriptive tag selecting editor syntax and formatter
//! - Error types: [`DecodeError`], [`FormatError`], [`UnknownContentType`]

mod body;
pub use body::BodyBytes;

mod mode;
pub use mode::EncodingMode;

mod content_type;
pub use content_type::ContentType;
pub use content_type::ContentTypeInfo;
pub use content_type::FormatterKind;

mod error;
pub use error::DecodeError;
pub use error::FormatError;
pub use error::UnknownContentType;
