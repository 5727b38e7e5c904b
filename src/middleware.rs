use axum::{
    extract::Request,
    http::uri::{PathAndQuery, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Strip a single trailing slash so `/movies/` routes like `/movies`.
/// Must run before routing.
pub async fn normalize_path(mut req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if path.len() > 1 && path.ends_with('/') {
        let trimmed = &path[..path.len() - 1];
        let new_path_and_query = match req.uri().query() {
            Some(query) => format!("{}?{}", trimmed, query),
            None => trimmed.to_string(),
        };

        if let Ok(pq) = new_path_and_query.parse::<PathAndQuery>() {
            let mut parts = req.uri().clone().into_parts();
            parts.path_and_query = Some(pq);
            if let Ok(new_uri) = Uri::from_parts(parts) {
                *req.uri_mut() = new_uri;
            }
        }
    }

    next.run(req).await
}

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    info!(
        method = %method,
        url = %uri,
        status = status,
        length = ?content_length,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}
