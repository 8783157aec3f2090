use async_trait::async_trait;
use micro_body::format::Formatter;
use micro_body::protocol::FormatError;

/// Rewrites `application/x-www-form-urlencoded` text in canonical form: every pair is
/// decoded and encoded again, spaces become `+`, surrounding whitespace is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFormatter;

#[async_trait]
impl Formatter for FormFormatter {
    async fn format(&self, text: String) -> Result<String, FormatError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(text.trim()).map_err(FormatError::rejected)?;
        serde_urlencoded::to_string(&pairs).map_err(FormatError::rejected)
    }
}
