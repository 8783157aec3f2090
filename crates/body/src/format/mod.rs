//! The formatter seam and the attempts it runs in.
//!
//! Formatters are supplied from outside the engine, one per content type. They run out
//! of band: [`EditableBody::begin_format`](crate::editable::EditableBody::begin_format)
//! hands back a [`FormatTask`] keyed by an [`AttemptId`], the caller drives it to
//! completion wherever it likes and feeds the [`Settled`] result back.

mod task;

pub use task::AttemptId;
pub use task::FormatTask;
pub use task::Settled;

use crate::protocol::FormatError;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Transforms body text, e.g. pretty printing it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Formatter: Send + Sync {
    async fn format(&self, text: String) -> Result<String, FormatError>;
}

/// a [`Formatter`] backed by an async function
#[derive(Debug)]
pub struct FnFormatter<F> {
    f: F,
}

pub fn formatter_fn<F, Fut>(f: F) -> FnFormatter<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, FormatError>> + Send,
{
    FnFormatter { f }
}

#[async_trait]
impl<F, Fut> Formatter for FnFormatter<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, FormatError>> + Send,
{
    async fn format(&self, text: String) -> Result<String, FormatError> {
        (self.f)(text).await
    }
}
