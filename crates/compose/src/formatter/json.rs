use async_trait::async_trait;
use micro_body::format::Formatter;
use micro_body::protocol::FormatError;
use serde_json::Value;

/// Pretty prints JSON with two space indentation.
///
/// Object keys keep their original order and numbers keep their original text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[async_trait]
impl Formatter for JsonFormatter {
    async fn format(&self, text: String) -> Result<String, FormatError> {
        let value: Value = serde_json::from_str(&text).map_err(FormatError::rejected)?;
        serde_json::to_string_pretty(&value).map_err(FormatError::rejected)
    }
}
