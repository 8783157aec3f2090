//! Built-in formatters and the per content type lookup table.

mod form;
mod json;

pub use form::FormFormatter;
pub use json::JsonFormatter;

use micro_body::format::Formatter;
use micro_body::protocol::{ContentType, FormatterKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Returns the built-in implementation of a [`FormatterKind`].
pub fn builtin(kind: FormatterKind) -> Arc<dyn Formatter> {
    match kind {
        FormatterKind::Json => Arc::new(JsonFormatter),
        FormatterKind::Form => Arc::new(FormFormatter),
    }
}

/// Maps content types to the formatter used when a format is requested.
#[derive(Clone)]
pub struct FormatterRegistry {
    formatters: HashMap<ContentType, Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn empty() -> Self {
        Self { formatters: HashMap::new() }
    }

    /// A registry holding the built-in formatter of every content type which has one.
    pub fn with_builtins() -> Self {
        let formatters = ContentType::all()
            .iter()
            .filter_map(|content_type| content_type.formatter().map(|kind| (*content_type, builtin(kind))))
            .collect();
        Self { formatters }
    }

    /// Registers `formatter` for `content_type`, returning the one it replaces.
    pub fn register(&mut self, content_type: ContentType, formatter: Arc<dyn Formatter>) -> Option<Arc<dyn Formatter>> {
        self.formatters.insert(content_type, formatter)
    }

    pub fn remove(&mut self, content_type: ContentType) -> Option<Arc<dyn Formatter>> {
        self.formatters.remove(&content_type)
    }

    pub fn get(&self, content_type: ContentType) -> Option<Arc<dyn Formatter>> {
        self.formatters.get(&content_type).cloned()
    }

    pub fn contains(&self, content_type: ContentType) -> bool {
        self.formatters.contains_key(&content_type)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}
