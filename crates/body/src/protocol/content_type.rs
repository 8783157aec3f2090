//! The registry of editable content types.
//!
//! A [`ContentType`] only describes how the text of a body should be presented and
//! which formatter applies to it. It never changes how bytes map to characters: that
//! is decided by the classifier from the bytes themselves, the [`ContentTypeInfo::mode_hint`]
//! is advisory.

use crate::protocol::{EncodingMode, UnknownContentType};
use mime::Mime;
use std::fmt;
use std::str::FromStr;

/// The content types selectable in the body editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Text,
    Json,
    Xml,
    Html,
    Css,
    Javascript,
    Markdown,
    Yaml,
    Form,
}

/// The built-in formatting strategies a content type can be associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    /// Pretty print with two space indentation, keeping key order and number text.
    Json,

    /// Canonical `application/x-www-form-urlencoded` encoding of the parsed pairs.
    Form,
}

/// Static description of a [`ContentType`].
#[derive(Debug, PartialEq, Eq)]
pub struct ContentTypeInfo {
    content_type: ContentType,
    label: &'static str,
    syntax: &'static str,
    media_type: &'static str,
    formatter: Option<FormatterKind>,
    mode_hint: EncodingMode,
}

impl ContentTypeInfo {
    const fn text(
        content_type: ContentType,
        label: &'static str,
        syntax: &'static str,
        media_type: &'static str,
        formatter: Option<FormatterKind>,
    ) -> Self {
        Self { content_type, label, syntax, media_type, formatter, mode_hint: EncodingMode::Utf8 }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Human readable name, as shown in the content type selector.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Language id of the editor syntax highlighting.
    pub fn syntax(&self) -> &'static str {
        self.syntax
    }

    /// The canonical media type for this content type.
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    pub fn formatter(&self) -> Option<FormatterKind> {
        self.formatter
    }

    /// The mode this content type is usually edited in. The classifier's verdict
    /// always wins when the body is actually decoded.
    pub fn mode_hint(&self) -> EncodingMode {
        self.mode_hint
    }
}

const ALL: [ContentType; 9] = [
    ContentType::Text,
    ContentType::Json,
    ContentType::Xml,
    ContentType::Html,
    ContentType::Css,
    ContentType::Javascript,
    ContentType::Markdown,
    ContentType::Yaml,
    ContentType::Form,
];

// indexed by the `ContentType` discriminant
static REGISTRY: [ContentTypeInfo; 9] = [
    ContentTypeInfo::text(ContentType::Text, "Text", "text", "text/plain", None),
    ContentTypeInfo::text(ContentType::Json, "JSON", "json", "application/json", Some(FormatterKind::Json)),
    ContentTypeInfo::text(ContentType::Xml, "XML", "xml", "application/xml", None),
    ContentTypeInfo::text(ContentType::Html, "HTML", "html", "text/html", None),
    ContentTypeInfo::text(ContentType::Css, "CSS", "css", "text/css", None),
    ContentTypeInfo::text(ContentType::Javascript, "JavaScript", "javascript", "text/javascript", None),
    ContentTypeInfo::text(ContentType::Markdown, "Markdown", "markdown", "text/markdown", None),
    ContentTypeInfo::text(ContentType::Yaml, "YAML", "yaml", "application/yaml", None),
    ContentTypeInfo::text(
        ContentType::Form,
        "URL-Encoded Form",
        "form",
        "application/x-www-form-urlencoded",
        Some(FormatterKind::Form),
    ),
];

impl ContentType {
    /// All selectable content types, in menu order.
    pub fn all() -> &'static [ContentType] {
        &ALL
    }

    pub fn info(self) -> &'static ContentTypeInfo {
        &REGISTRY[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label()
    }

    pub fn formatter(self) -> Option<FormatterKind> {
        self.info().formatter()
    }

    /// Suggests an editor content type for a media type, e.g. one taken from a
    /// `Content-Type` header.
    ///
    /// Structured syntax suffixes are honored, so `application/problem+json` maps to
    /// [`ContentType::Json`]. Unknown non-text media types map to `None`.
    pub fn from_mime(mime: &Mime) -> Option<Self> {
        let suffix = mime.suffix();
        let content_type = match (mime.type_().as_str(), mime.subtype().as_str(), suffix.as_ref().map(|s| s.as_str())) {
            (_, "json", _) | (_, _, Some("json")) => ContentType::Json,
            (_, "xml", _) | (_, _, Some("xml")) => ContentType::Xml,
            ("text", "html", _) => ContentType::Html,
            ("text", "css", _) => ContentType::Css,
            (_, "javascript" | "x-javascript" | "ecmascript", _) => ContentType::Javascript,
            ("text", "markdown" | "x-markdown", _) => ContentType::Markdown,
            (_, "yaml" | "x-yaml", _) | (_, _, Some("yaml")) => ContentType::Yaml,
            ("application", "x-www-form-urlencoded", _) => ContentType::Form,
            ("text", _, _) => ContentType::Text,
            _ => return None,
        };
        Some(content_type)
    }

    /// Same as [`ContentType::from_mime`], parsing the media type first.
    pub fn from_mime_str(media_type: &str) -> Option<Self> {
        media_type.trim().parse::<Mime>().ok().and_then(|mime| Self::from_mime(&mime))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().syntax())
    }
}

/// Parses either the syntax id (`"json"`) or the label (`"JSON"`), ignoring case.
impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL.iter()
            .copied()
            .find(|content_type| {
                let info = content_type.info();
                info.syntax().eq_ignore_ascii_case(s) || info.label().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownContentType::new(s))
    }
}
