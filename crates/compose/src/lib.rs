//! Request body composition on top of [`micro_body`].
//!
//! This crate is what a request composer's view layer talks to. It wraps a
//! [`RequestInput`] in a [`RequestBodyAdapter`] which exposes the body as editable
//! text, takes edits and content type changes, and runs formatters out of band on a
//! tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use http::Method;
//! use micro_body::protocol::ContentType;
//! use micro_compose::{RequestBodyAdapter, RequestInput};
//!
//! #[tokio::main]
//! async fn main() {
//!     let request = RequestInput::new(Method::POST, "https://example.com/hello").with_body(r#"{"name":"world"}"#);
//!     let mut adapter = RequestBodyAdapter::builder()
//!         .request(request)
//!         .content_type(ContentType::Json)
//!         .build()
//!         .expect("running inside a tokio runtime");
//!
//!     adapter.request_format().expect("json has a formatter");
//!     adapter.next_settled().await;
//!
//!     println!("{}", adapter.display_text().text());
//! }
//! ```
//!
//! # Components
//!
//! - [`RequestBodyAdapter`]: the sole write path into the body
//! - [`formatter`]: built-in JSON and form formatters and the [`FormatterRegistry`]
//! - [`FormatRunner`]: spawns format tasks and collects their results in completion order

mod adapter;
mod request;
mod runner;

pub mod formatter;

pub use adapter::AdapterBuildError;
pub use adapter::RequestBodyAdapter;
pub use adapter::RequestBodyAdapterBuilder;
pub use formatter::FormatterRegistry;
pub use request::RawHeaders;
pub use request::RequestHead;
pub use request::RequestInput;
pub use runner::FormatRunner;
