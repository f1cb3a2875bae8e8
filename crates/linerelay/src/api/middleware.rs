//! HTTP middleware

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Record request count and latency for every route.
///
/// Calls to the exposition endpoint itself are skipped so scrapes do not
/// inflate the series they read.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let path = if let Some(matched) = req.extensions().get::<MatchedPath>() {
        matched.as_str().to_owned()
    } else {
        req.uri().path().to_owned()
    };

    if path == "/metrics" {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels).record(latency);

    response
}
