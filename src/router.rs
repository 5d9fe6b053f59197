use std::path::Path;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");
pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// Static file service for `root`.
///
/// Every response, including 404s and other errors, carries
/// `Cross-Origin-Embedder-Policy: require-corp` and
/// `Cross-Origin-Opener-Policy: same-origin` so browsers treat the page as
/// cross-origin isolated (needed for `SharedArrayBuffer`).
pub fn router(root: &Path) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(log_request))
        .layer(SetResponseHeaderLayer::overriding(
            CROSS_ORIGIN_OPENER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CROSS_ORIGIN_EMBEDDER_POLICY,
            HeaderValue::from_static("require-corp"),
        ))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    log::info!("\"{} {}\" {}", method, uri, response.status().as_u16());
    response
}
