use http::Method;
use micro_body::protocol::ContentType;
use micro_compose::{RequestBodyAdapter, RequestInput};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let request = RequestInput::new(Method::POST, "https://example.com/hello?name=world")
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"greeting":"hello","targets":["world"]}"#);

    let content_type = request
        .headers()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .and_then(|(_, value)| ContentType::from_mime_str(value))
        .unwrap_or_default();

    let mut adapter = match RequestBodyAdapter::builder().request(request).content_type(content_type).build() {
        Ok(adapter) => adapter,
        Err(e) => {
            error!(cause = %e, "build adapter error");
            return;
        }
    };

    let shown = adapter.display_text();
    info!(mode = %shown.mode(), content_type = %adapter.content_type(), "editing body:\n{}", shown.text());

    match adapter.request_format() {
        Ok(attempt) => info!(%attempt, "format requested"),
        Err(e) => error!(cause = %e, "format unavailable"),
    }
    let settlement = adapter.next_settled().await;
    let shown = adapter.display_text();
    info!(?settlement, "formatted body:\n{}", shown.text());

    adapter.apply_edit("not json at all");
    let _ = adapter.request_format();
    adapter.next_settled().await;
    if let Some(e) = adapter.format_error() {
        info!(cause = %e, "format failed, body kept as typed");
    }

    let request = adapter.into_request();
    info!(method = %request.method(), url = request.url(), len = request.body().len(), "request ready");
}
