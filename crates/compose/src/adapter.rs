use crate::formatter::FormatterRegistry;
use crate::request::{RequestHead, RequestInput};
use crate::runner::FormatRunner;
use micro_body::classify::classify;
use micro_body::codec::{self, DisplayText};
use micro_body::editable::{EditableBody, EncodingAttemptResult, Settlement};
use micro_body::format::{AttemptId, Formatter};
use micro_body::protocol::{BodyBytes, ContentType, EncodingMode, FormatError};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use tracing::{debug, trace};

/// The surface a view layer edits a request body through.
///
/// The adapter is the only way to change the body once a request is handed to it:
/// text edits are re-encoded through the codec, format requests run through the
/// registered formatters, and content type changes never touch the bytes.
#[derive(Debug)]
pub struct RequestBodyAdapter {
    head: RequestHead,
    body: EditableBody,
    content_type: ContentType,
    // mode of the text last handed to the view, edits come back in it
    edit_mode: Option<EncodingMode>,
    formatters: FormatterRegistry,
    runner: FormatRunner,
}

#[derive(Error, Debug)]
pub enum AdapterBuildError {
    #[error("no tokio runtime to run formatters on: {source}")]
    MissingRuntime {
        #[from]
        source: TryCurrentError,
    },
}

#[derive(Debug, Default)]
pub struct RequestBodyAdapterBuilder {
    request: Option<RequestInput>,
    content_type: ContentType,
    formatters: Option<FormatterRegistry>,
    handle: Option<Handle>,
}

impl RequestBodyAdapterBuilder {
    fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn request(mut self, request: RequestInput) -> Self {
        self.request = Some(request);
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Replaces the whole formatter table, built-ins included.
    #[must_use]
    pub fn formatters(mut self, formatters: FormatterRegistry) -> Self {
        self.formatters = Some(formatters);
        self
    }

    /// Registers `formatter` for `content_type` on top of the built-ins.
    #[must_use]
    pub fn formatter(mut self, content_type: ContentType, formatter: impl Formatter + 'static) -> Self {
        self.formatters.get_or_insert_with(FormatterRegistry::with_builtins).register(content_type, Arc::new(formatter));
        self
    }

    /// The runtime formatters are spawned on. Defaults to the current one.
    #[must_use]
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn build(self) -> Result<RequestBodyAdapter, AdapterBuildError> {
        let handle = match self.handle {
            Some(handle) => handle,
            None => Handle::try_current()?,
        };
        let (head, body) = self.request.unwrap_or_default().into_parts();

        Ok(RequestBodyAdapter {
            head,
            body: EditableBody::with_bytes(body),
            content_type: self.content_type,
            edit_mode: None,
            formatters: self.formatters.unwrap_or_default(),
            runner: FormatRunner::new(handle),
        })
    }
}

impl RequestBodyAdapter {
    pub fn builder() -> RequestBodyAdapterBuilder {
        RequestBodyAdapterBuilder::new()
    }

    /// An adapter for `request` with default formatters, on the current runtime.
    pub fn new(request: RequestInput) -> Result<Self, AdapterBuildError> {
        Self::builder().request(request).build()
    }

    /// The current body as text, with the mode it was decoded in.
    ///
    /// The next [`RequestBodyAdapter::apply_edit`] encodes with that same mode.
    pub fn display_text(&mut self) -> DisplayText {
        let display = self.body.display();
        self.edit_mode = Some(display.mode());
        display
    }

    /// Replaces the body with the edited `text`.
    pub fn apply_edit(&mut self, text: &str) {
        let mode = self.edit_mode.unwrap_or_else(|| classify(self.body.bytes()));
        trace!(%mode, len = text.len(), "apply body edit");
        self.body.set_bytes(codec::encode(text, mode));
    }

    /// Changes how the body is presented and formatted. The bytes are left untouched.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        trace!(from = %self.content_type, to = %content_type, "change content type");
        self.content_type = content_type;
    }

    /// Starts formatting the body with the formatter of the current content type.
    ///
    /// The result is applied by [`RequestBodyAdapter::poll_settled`] or
    /// [`RequestBodyAdapter::next_settled`], provided nothing superseded the attempt.
    pub fn request_format(&mut self) -> Result<AttemptId, FormatError> {
        let Some(formatter) = self.formatters.get(self.content_type) else {
            debug!(content_type = %self.content_type, "no formatter registered");
            return Err(FormatError::unsupported(self.content_type));
        };

        let task = self.body.begin_format(formatter, self.content_type);
        let id = task.id();
        self.runner.spawn(task);
        Ok(id)
    }

    /// Applies every format result that has already arrived, without waiting.
    pub fn poll_settled(&mut self) -> Vec<Settlement> {
        let mut settlements = Vec::new();
        while let Some(settled) = self.runner.try_next() {
            settlements.push(self.body.settle(settled));
        }
        settlements
    }

    /// Waits for the next format result and applies it.
    ///
    /// Returns `None` when no formatter is running.
    pub async fn next_settled(&mut self) -> Option<Settlement> {
        let settled = self.runner.next().await?;
        Some(self.body.settle(settled))
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn bytes(&self) -> &BodyBytes {
        self.body.bytes()
    }

    /// See [`EditableBody::version`].
    pub fn version(&self) -> u64 {
        self.body.version()
    }

    pub fn latest_result(&self) -> Option<&EncodingAttemptResult> {
        self.body.latest_result()
    }

    pub fn pending_attempt(&self) -> Option<AttemptId> {
        self.body.pending_attempt()
    }

    /// The error to show in a banner above the editor, if the latest format failed.
    pub fn format_error(&self) -> Option<&FormatError> {
        self.body.format_error()
    }

    pub fn head(&self) -> &RequestHead {
        &self.head
    }

    /// Method, URL and headers are the view's business and pass through unchanged.
    pub fn head_mut(&mut self) -> &mut RequestHead {
        &mut self.head
    }

    /// The request as it would be sent right now.
    pub fn to_request(&self) -> RequestInput {
        RequestInput::from_parts(self.head.clone(), self.body.bytes().clone())
    }

    pub fn into_request(self) -> RequestInput {
        let Self { head, body, .. } = self;
        RequestInput::from_parts(head, body.bytes().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use micro_body::format::formatter_fn;
    use tokio::sync::Notify;

    const PRETTY: &str = "{\n  \"a\": 1\n}";

    fn json_request() -> RequestInput {
        RequestInput::new(Method::POST, "https://example.com/api")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"a":1}"#)
    }

    // settles only once `gate` is notified
    fn gated(gate: Arc<Notify>, output: &'static str) -> impl Formatter {
        formatter_fn(move |_text: String| {
            let gate = Arc::clone(&gate);
            async move {
                gate.notified().await;
                Ok::<_, FormatError>(output.to_owned())
            }
        })
    }

    #[test]
    fn test_build_without_runtime() {
        let result = RequestBodyAdapter::new(RequestInput::default());
        assert!(matches!(result, Err(AdapterBuildError::MissingRuntime { .. })));
    }

    #[tokio::test]
    async fn test_format_json() {
        let mut adapter = RequestBodyAdapter::builder().request(json_request()).content_type(ContentType::Json).build().unwrap();

        let display = adapter.display_text();
        assert_eq!(display.mode(), EncodingMode::Utf8);
        assert_eq!(display.text(), r#"{"a":1}"#);

        let id = adapter.request_format().unwrap();
        assert_eq!(adapter.pending_attempt(), Some(id));
        assert_eq!(adapter.latest_result(), Some(&EncodingAttemptResult::Pending));

        assert_eq!(adapter.next_settled().await, Some(Settlement::Fulfilled));
        assert_eq!(adapter.bytes().as_bytes(), PRETTY.as_bytes());
        assert_eq!(adapter.display_text().text(), PRETTY);
        assert_eq!(adapter.next_settled().await, None);
    }

    #[tokio::test]
    async fn test_format_rejection_keeps_text() {
        let request = json_request().with_body("{oops");
        let mut adapter = RequestBodyAdapter::builder().request(request).content_type(ContentType::Json).build().unwrap();

        adapter.request_format().unwrap();
        assert_eq!(adapter.next_settled().await, Some(Settlement::Rejected));

        assert!(matches!(adapter.format_error(), Some(FormatError::Rejected { .. })));
        assert_eq!(adapter.display_text().text(), "{oops");

        adapter.apply_edit("{}");
        assert_eq!(adapter.format_error(), None);
    }

    #[tokio::test]
    async fn test_unsupported_content_type() {
        let mut adapter = RequestBodyAdapter::new(json_request()).unwrap();
        assert_eq!(adapter.content_type(), ContentType::Text);

        assert_eq!(adapter.request_format(), Err(FormatError::unsupported(ContentType::Text)));
        assert_eq!(adapter.latest_result(), None);
        assert_eq!(adapter.bytes().as_bytes(), br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_content_type_change_keeps_bytes() {
        let mut adapter = RequestBodyAdapter::new(json_request()).unwrap();
        let version = adapter.version();

        for content_type in ContentType::all() {
            adapter.set_content_type(*content_type);
            assert_eq!(adapter.content_type(), *content_type);
        }

        assert_eq!(adapter.version(), version);
        assert_eq!(adapter.bytes().as_bytes(), br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_newer_attempt_wins_over_slower_older_one() {
        let gate = Arc::new(Notify::new());
        let mut adapter = RequestBodyAdapter::builder()
            .request(json_request())
            .content_type(ContentType::Xml)
            .formatter(ContentType::Xml, gated(Arc::clone(&gate), "<slow/>"))
            .build()
            .unwrap();

        let a1 = adapter.request_format().unwrap();
        adapter.set_content_type(ContentType::Json);
        let a2 = adapter.request_format().unwrap();
        assert!(a2 > a1);

        assert_eq!(adapter.next_settled().await, Some(Settlement::Fulfilled));
        assert_eq!(adapter.bytes().as_bytes(), PRETTY.as_bytes());

        gate.notify_one();
        assert_eq!(adapter.next_settled().await, Some(Settlement::Stale));
        assert_eq!(adapter.bytes().as_bytes(), PRETTY.as_bytes());
        assert_eq!(adapter.latest_result(), Some(&EncodingAttemptResult::Fulfilled(PRETTY.into())));
    }

    #[tokio::test]
    async fn test_edit_supersedes_pending_format() {
        let gate = Arc::new(Notify::new());
        let mut adapter = RequestBodyAdapter::builder()
            .request(json_request())
            .content_type(ContentType::Json)
            .formatter(ContentType::Json, gated(Arc::clone(&gate), "formatted"))
            .build()
            .unwrap();

        adapter.display_text();
        adapter.request_format().unwrap();
        adapter.apply_edit(r#"{"b":2}"#);
        assert_eq!(adapter.pending_attempt(), None);

        gate.notify_one();
        assert_eq!(adapter.next_settled().await, Some(Settlement::Stale));
        assert_eq!(adapter.display_text().text(), r#"{"b":2}"#);
        assert_eq!(adapter.latest_result(), None);
    }

    #[tokio::test]
    async fn test_poll_settled() {
        let mut adapter = RequestBodyAdapter::builder()
            .request(json_request().with_body("a=1&b=x y"))
            .content_type(ContentType::Form)
            .build()
            .unwrap();

        adapter.request_format().unwrap();
        while adapter.pending_attempt().is_some() {
            tokio::task::yield_now().await;
            for settlement in adapter.poll_settled() {
                assert_eq!(settlement, Settlement::Fulfilled);
            }
        }

        assert_eq!(adapter.bytes().as_bytes(), b"a=1&b=x+y");
    }

    #[tokio::test]
    async fn test_binary_body_edits_stay_binary() {
        let request = RequestInput::new(Method::PUT, "/blob").with_body(vec![0xFF_u8, 0x41]);
        let mut adapter = RequestBodyAdapter::new(request).unwrap();

        let display = adapter.display_text();
        assert_eq!(display.mode(), EncodingMode::Binary);
        assert_eq!(display.text(), "\u{FF}A");

        adapter.apply_edit("\u{FF}B");
        assert_eq!(adapter.bytes().as_bytes(), &[0xFF, 0x42]);
    }

    #[tokio::test]
    async fn test_edit_without_display_uses_classifier() {
        let mut adapter = RequestBodyAdapter::new(RequestInput::default()).unwrap();
        adapter.apply_edit("héllo");
        assert_eq!(adapter.bytes().as_bytes(), "héllo".as_bytes());
    }

    #[tokio::test]
    async fn test_head_passes_through() {
        let mut adapter = RequestBodyAdapter::new(json_request()).unwrap();
        adapter.head_mut().headers.push(("X-Trace".into(), "1".into()));
        adapter.apply_edit("[]");

        let request = adapter.into_request();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url(), "https://example.com/api");
        assert_eq!(
            request.headers(),
            &vec![("Content-Type".to_owned(), "application/json".to_owned()), ("X-Trace".to_owned(), "1".to_owned())]
        );
        assert_eq!(request.body().as_bytes(), b"[]");
    }

    #[tokio::test]
    async fn test_format_on_shut_down_runtime_is_aborted() {
        let side = tokio::runtime::Builder::new_multi_thread().worker_threads(1).enable_all().build().unwrap();
        let mut adapter = RequestBodyAdapter::builder()
            .request(json_request())
            .content_type(ContentType::Json)
            .formatter(ContentType::Json, formatter_fn(|_text: String| std::future::pending::<Result<String, FormatError>>()))
            .runtime(side.handle().clone())
            .build()
            .unwrap();

        adapter.request_format().unwrap();
        side.shutdown_background();

        let settlement = tokio::time::timeout(std::time::Duration::from_secs(5), adapter.next_settled()).await.unwrap();
        assert_eq!(settlement, Some(Settlement::Rejected));
        assert_eq!(adapter.pending_attempt(), None);
        assert!(matches!(adapter.format_error(), Some(FormatError::Aborted { .. })));
        assert_eq!(adapter.bytes().as_bytes(), br#"{"a":1}"#);
    }
}
