use crate::format::Formatter;
use crate::protocol::{ContentType, FormatError};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Identifies one formatting attempt. Ids are strictly increasing per body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    pub(crate) const FIRST: AttemptId = AttemptId(1);

    pub(crate) fn next(self) -> Self {
        AttemptId(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A formatter call bound to the attempt it was started for.
///
/// The task does nothing until it is awaited through [`FormatTask::run`]; it can be
/// spawned on any executor since the future is `Send + 'static`.
pub struct FormatTask {
    id: AttemptId,
    content_type: ContentType,
    fut: BoxFuture<'static, Result<String, FormatError>>,
}

impl FormatTask {
    pub(crate) fn new(id: AttemptId, content_type: ContentType, formatter: Arc<dyn Formatter>, text: String) -> Self {
        let fut = async move { formatter.format(text).await }.boxed();
        Self { id, content_type, fut }
    }

    pub fn id(&self) -> AttemptId {
        self.id
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Runs the formatter and tags its outcome with the attempt id.
    pub async fn run(self) -> Settled {
        let outcome = self.fut.await;
        Settled { id: self.id, outcome }
    }
}

impl fmt::Debug for FormatTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatTask").field("id", &self.id).field("content_type", &self.content_type).finish_non_exhaustive()
    }
}

/// The outcome of a formatter call, addressed to the attempt that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    id: AttemptId,
    outcome: Result<String, FormatError>,
}

impl Settled {
    pub fn new(id: AttemptId, outcome: Result<String, FormatError>) -> Self {
        Self { id, outcome }
    }

    pub fn fulfilled(id: AttemptId, text: String) -> Self {
        Self::new(id, Ok(text))
    }

    pub fn rejected(id: AttemptId, error: FormatError) -> Self {
        Self::new(id, Err(error))
    }

    pub fn id(&self) -> AttemptId {
        self.id
    }

    pub fn outcome(&self) -> &Result<String, FormatError> {
        &self.outcome
    }

    pub fn into_parts(self) -> (AttemptId, Result<String, FormatError>) {
        (self.id, self.outcome)
    }
}
