//! The engine behind an editable HTTP request body.
//!
//! This crate turns an opaque request payload into text a user can edit, and edited
//! text back into the payload that will be sent, without ever losing bytes the user
//! did not touch. It knows nothing about rendering or transmission.
//!
//! # Architecture
//!
//! - [`classify`]: decides whether a payload is safe to show as UTF-8 text
//! - [`codec`]: converts bytes to text and back for a given [`protocol::EncodingMode`]
//! - [`protocol`]: the body, encoding mode, content type registry and error types
//! - [`format`]: the [`format::Formatter`] seam and the tasks formatting attempts run in
//! - [`editable`]: the [`editable::EditableBody`] state machine tying it all together
//!
//! # Example
//!
//! ```
//! use micro_body::editable::EditableBody;
//! use micro_body::protocol::EncodingMode;
//!
//! let mut body = EditableBody::with_bytes(r#"{"a":1}"#);
//! assert_eq!(body.display().mode(), EncodingMode::Utf8);
//!
//! body.set_bytes(vec![0xFF_u8, 0xFE]);
//! let display = body.display();
//! assert_eq!(display.mode(), EncodingMode::Binary);
//! assert_eq!(display.text(), "\u{FF}\u{FE}");
//! ```
//!
//! # Formatting attempts
//!
//! Formatting runs out of band. [`editable::EditableBody::begin_format`] returns a
//! [`format::FormatTask`] stamped with an [`format::AttemptId`]; when the task is done
//! its [`format::Settled`] result goes back through
//! [`editable::EditableBody::settle`]. A result is applied only if its attempt is still
//! the outstanding one: any edit or newer attempt supersedes it, and a late result is
//! reported as [`editable::Settlement::Stale`] without touching the body.

pub mod classify;
pub mod codec;
pub mod editable;
pub mod format;
pub mod protocol;
