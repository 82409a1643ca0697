use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Middleware that logs request timing and status
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::info!("--> {} {}", method, uri);

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::warn!("<-- {} {} {} {:?}", method, uri, status, duration);
    } else {
        tracing::info!("<-- {} {} {} {:?}", method, uri, status, duration);
    }

    response
}
