use crate::codec::{self, DisplayText};
use crate::format::{AttemptId, FormatTask, Formatter, Settled};
use crate::protocol::{BodyBytes, ContentType, EncodingMode, FormatError};
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of the latest formatting attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingAttemptResult {
    Pending,
    Fulfilled(String),
    Rejected(FormatError),
}

impl EncodingAttemptResult {
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, EncodingAttemptResult::Pending)
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, EncodingAttemptResult::Rejected(_))
    }
}

/// What happened to a settlement handed to [`EditableBody::on_format_settled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// the formatted text replaced the body
    Fulfilled,
    /// the formatter failed, the body is untouched
    Rejected,
    /// the attempt had been superseded, nothing changed
    Stale,
}

impl Settlement {
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Settlement::Stale)
    }
}

#[derive(Debug)]
struct Attempt {
    id: AttemptId,
    // mode the formatter input was decoded with, used to encode its output
    mode: EncodingMode,
    result: EncodingAttemptResult,
}

/// Authoritative body bytes plus the state of the latest formatting attempt.
#[derive(Debug, Default)]
pub struct EditableBody {
    bytes: BodyBytes,
    version: u64,
    last_attempt_id: Option<AttemptId>,
    attempt: Option<Attempt>,
}

impl EditableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<BodyBytes>) -> Self {
        Self { bytes: bytes.into(), ..Self::default() }
    }

    pub fn bytes(&self) -> &BodyBytes {
        &self.bytes
    }

    /// Incremented by every operation which changes the body or the attempt outcome.
    ///
    /// A view holding a [`DisplayText`] can compare versions to know it must call
    /// [`EditableBody::display`] again.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Derives the display text from the current bytes.
    ///
    /// The mode is re-classified on every call, it is never cached across edits.
    pub fn display(&self) -> DisplayText {
        codec::render(&self.bytes)
    }

    /// Replaces the body and abandons any outstanding attempt.
    pub fn set_bytes(&mut self, bytes: impl Into<BodyBytes>) {
        if let Some(id) = self.pending_attempt() {
            debug!(attempt = %id, "body edited, superseding pending format attempt");
        }
        self.bytes = bytes.into();
        self.attempt = None;
        self.version += 1;
    }

    /// Starts formatting the current text.
    ///
    /// Any earlier attempt is superseded. The returned task must be driven by the
    /// caller and its result passed to [`EditableBody::on_format_settled`].
    pub fn begin_format(&mut self, formatter: Arc<dyn Formatter>, content_type: ContentType) -> FormatTask {
        let (text, mode) = self.display().into_parts();
        let id = self.last_attempt_id.map_or(AttemptId::FIRST, AttemptId::next);
        self.last_attempt_id = Some(id);

        if let Some(previous) = self.pending_attempt() {
            debug!(attempt = %previous, superseded_by = %id, "superseding pending format attempt");
        }
        trace!(attempt = %id, %mode, %content_type, "begin format attempt");

        self.attempt = Some(Attempt { id, mode, result: EncodingAttemptResult::Pending });
        FormatTask::new(id, content_type, formatter, text)
    }

    /// Applies the outcome of attempt `id` if it is still the outstanding one.
    ///
    /// On success the formatted text is encoded with the mode the attempt started in
    /// and becomes the new body. On failure the body is left as is and the error is
    /// kept for display. Anything addressed to another attempt is dropped.
    pub fn on_format_settled(&mut self, id: AttemptId, outcome: Result<String, FormatError>) -> Settlement {
        let Some(attempt) = self.attempt.as_mut().filter(|attempt| attempt.id == id && attempt.result.is_pending()) else {
            debug!(attempt = %id, "discarding stale format result");
            return Settlement::Stale;
        };

        self.version += 1;
        match outcome {
            Ok(text) => {
                trace!(attempt = %id, len = text.len(), "format attempt fulfilled");
                self.bytes = codec::encode(&text, attempt.mode);
                attempt.result = EncodingAttemptResult::Fulfilled(text);
                Settlement::Fulfilled
            }
            Err(error) => {
                debug!(attempt = %id, cause = %error, "format attempt rejected");
                attempt.result = EncodingAttemptResult::Rejected(error);
                Settlement::Rejected
            }
        }
    }

    pub fn settle(&mut self, settled: Settled) -> Settlement {
        let (id, outcome) = settled.into_parts();
        self.on_format_settled(id, outcome)
    }

    /// The outcome of the latest attempt, or `None` if there is none since the last edit.
    pub fn latest_result(&self) -> Option<&EncodingAttemptResult> {
        self.attempt.as_ref().map(|attempt| &attempt.result)
    }

    /// The id of the attempt still waiting for its formatter, if any.
    pub fn pending_attempt(&self) -> Option<AttemptId> {
        self.attempt.as_ref().filter(|attempt| attempt.result.is_pending()).map(|attempt| attempt.id)
    }

    /// The rejection to show next to the editor, if the latest attempt failed.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self.latest_result() {
            Some(EncodingAttemptResult::Rejected(error)) => Some(error),
            _ => None,
        }
    }
}
