use http::Method;
use micro_body::protocol::BodyBytes;

/// Raw header pairs in their original order. Never interpreted by the engine.
pub type RawHeaders = Vec<(String, String)>;

/// Everything about a composed request except its body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHead {
    pub method: Method,
    /// free text, the user may still be typing it
    pub url: String,
    pub headers: RawHeaders,
}

/// A request being composed: head plus body bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInput {
    head: RequestHead,
    body: BodyBytes,
}

impl RequestInput {
    pub fn new<U: Into<String>>(method: Method, url: U) -> Self {
        Self { head: RequestHead { method, url: url.into(), headers: RawHeaders::new() }, body: BodyBytes::empty() }
    }

    pub fn from_parts(head: RequestHead, body: BodyBytes) -> Self {
        Self { head, body }
    }

    pub fn into_parts(self) -> (RequestHead, BodyBytes) {
        (self.head, self.body)
    }

    #[must_use]
    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.head.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<BodyBytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn head(&self) -> &RequestHead {
        &self.head
    }

    pub fn method(&self) -> &Method {
        &self.head.method
    }

    pub fn url(&self) -> &str {
        &self.head.url
    }

    pub fn headers(&self) -> &RawHeaders {
        &self.head.headers
    }

    pub fn body(&self) -> &BodyBytes {
        &self.body
    }
}
