use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::application::{
    error::HttpError,
    sitemap::{SitemapDocument, SitemapService},
};

use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub sitemap: Arc<SitemapService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_root))
        .route("/sitemap/{file}", get(sitemap_page))
        .route("/robots.txt", get(robots_txt))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn sitemap_root(State(state): State<HttpState>) -> Response {
    serve_sitemap(&state, None).await
}

/// `/sitemap/{N}.xml`
async fn sitemap_page(State(state): State<HttpState>, Path(file): Path<String>) -> Response {
    match parse_page_file(&file) {
        Some(page) => serve_sitemap(&state, Some(page)).await,
        None => HttpError::not_found(
            "infra::http::public::sitemap_page",
            format!("`{file}` does not name a numbered sitemap"),
        )
        .into_response(),
    }
}

async fn serve_sitemap(state: &HttpState, page: Option<u32>) -> Response {
    match state.sitemap.generate(page).await {
        Ok(Some(document)) => xml_response(&document),
        Ok(None) => HttpError::not_found(
            "infra::http::public::sitemap",
            match page {
                Some(page) => format!("sitemap page {page} does not exist"),
                None => "sitemap has no urls".to_string(),
            },
        )
        .into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}

async fn robots_txt(State(state): State<HttpState>) -> Response {
    match state.sitemap.robots_txt() {
        Ok(body) => plain_response(body),
        Err(err) => HttpError::new(
            "infra::http::public::robots",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate robots.txt",
            err.to_string(),
        )
        .into_response(),
    }
}

async fn fallback() -> Response {
    HttpError::not_found("infra::http::public::fallback", "no route matched").into_response()
}

fn parse_page_file(file: &str) -> Option<u32> {
    let digits = file.strip_suffix(".xml")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn xml_response(document: &SitemapDocument) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/xml; charset=utf-8")
        .body(Body::from(document.to_xml()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn plain_response(body: String) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
