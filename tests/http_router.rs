mod support;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use storefront::application::repos::{ProductQueryFilter, ProductsRepo, RepoError};
use storefront::application::sitemap::{SitemapOptions, SitemapService};
use storefront::domain::entities::ProductRecord;
use storefront::infra::http::{HttpState, REQUEST_ID_HEADER, build_router};
use storefront::infra::routes::RouteTable;
use tower::ServiceExt;

use support::{catalog, options, service, seven_url_options};

fn router(sitemap: SitemapService) -> Router {
    build_router(HttpState {
        sitemap: Arc::new(sitemap),
    })
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router should respond");
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        content_type,
    )
}

#[tokio::test]
async fn root_sitemap_is_a_urlset_when_it_fits() {
    let router = router(service(options()));
    let (status, body, content_type) = get(&router, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml; charset=utf-8"));
    assert!(body.contains("<urlset "));
    assert!(body.contains("<loc>http://shop.example/promo/summer</loc>"));
}

#[tokio::test]
async fn numbered_pages_and_index() {
    let router = router(service(seven_url_options(3)));

    let (status, body, _) = get(&router, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<sitemapindex "));
    assert_eq!(body.matches("<sitemap>").count(), 3);

    let (status, body, _) = get(&router, "/sitemap/3.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<url>").count(), 1);

    for missing in ["/sitemap/4.xml", "/sitemap/0.xml", "/sitemap/x.xml", "/sitemap/2"] {
        let (status, _, _) = get(&router, missing).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{missing}");
    }
}

#[tokio::test]
async fn disabled_sitemap_is_not_found() {
    let router = router(service(SitemapOptions {
        enabled: false,
        ..options()
    }));

    let (status, body, _) = get(&router, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not found");

    let (status, body, _) = get(&router, "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Sitemap:"));
}

#[tokio::test]
async fn robots_txt_points_at_sitemap() {
    let router = router(service(SitemapOptions {
        force_ssl: true,
        ..options()
    }));
    let (status, body, content_type) = get(&router, "/robots.txt").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert!(body.ends_with("Sitemap: https://shop.example/sitemap.xml\n"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let router = router(service(options()));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/nowhere")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("request id header");
    assert_eq!(request_id.len(), 36);
}

struct FailingProducts;

#[async_trait]
impl ProductsRepo for FailingProducts {
    async fn search_products(
        &self,
        _filter: &ProductQueryFilter,
    ) -> Result<Vec<ProductRecord>, RepoError> {
        Err(RepoError::from_persistence("connection reset"))
    }
}

#[tokio::test]
async fn repository_failure_is_a_server_error() {
    let mut repos = catalog().sitemap_repos();
    repos.products = Arc::new(FailingProducts);
    let sitemap = SitemapService::new(
        repos,
        Arc::new(RouteTable::new("shop.example", "")),
        options(),
    );
    let router = router(sitemap);

    let (status, body, _) = get(&router, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to generate sitemap");
    assert!(!body.contains("connection reset"));
}
