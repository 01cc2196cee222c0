use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request correlation data, mirrored onto the response.
#[derive(Clone)]
pub struct RequestContext {
    pub request_id: String,
}

pub async fn set_request_context(mut request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let ctx = RequestContext {
        request_id: request_id.clone(),
    };
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response.extensions_mut().insert(ctx);
    response
}

/// Log the outcome of every request.
///
/// Failures carry the [`ErrorReport`] attached by the handler. Missing pages
/// are routine for crawlers probing numbered sitemaps, so they log at `info`.
pub async fn log_responses(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();
    let started_at = Instant::now();

    let mut response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis() as u64;

    if status.is_success() || status.is_redirection() {
        debug!(
            target: "storefront::http::response",
            status = status.as_u16(),
            method = %method,
            path = %path,
            elapsed_ms,
            request_id = %request_id,
            "request served"
        );
        return response;
    }

    let (source, chain) = response
        .extensions_mut()
        .remove::<ErrorReport>()
        .map(|report| (report.source, report.messages))
        .unwrap_or(("unreported", Vec::new()));

    if status.is_server_error() {
        error!(
            target: "storefront::http::response",
            status = status.as_u16(),
            method = %method,
            path = %path,
            elapsed_ms,
            source,
            chain = ?chain,
            request_id = %request_id,
            "request failed"
        );
    } else if status == StatusCode::NOT_FOUND {
        info!(
            target: "storefront::http::response",
            method = %method,
            path = %path,
            source,
            detail = chain.first().map(String::as_str).unwrap_or(""),
            request_id = %request_id,
            "not found"
        );
    } else {
        warn!(
            target: "storefront::http::response",
            status = status.as_u16(),
            method = %method,
            path = %path,
            source,
            chain = ?chain,
            request_id = %request_id,
            "client request error"
        );
    }

    response
}
