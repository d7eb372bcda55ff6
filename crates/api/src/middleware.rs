use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request with its outcome and latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, path = path.as_str(), status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(%method, path = path.as_str(), status = status.as_u16(), latency_ms, "request completed");
    }

    response
}
