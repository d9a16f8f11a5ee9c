mod common;

use common::{client_for, products_body, MockApi, MockResponse};
use storefront::api::{ApiError, CatalogClient, ProductQuery};
use storefront::config::ApiConfig;

fn query(limit: usize, category: &str, search: &str) -> ProductQuery {
    ProductQuery {
        limit,
        category: category.to_string(),
        query: search.to_string(),
    }
}

#[tokio::test]
async fn categories_accept_objects_and_slugs() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(
        r#"[{"slug": "home-decoration", "name": "Home Decoration", "url": "x"}, "beauty"]"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let categories = client.categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].slug, "home-decoration");
    assert_eq!(categories[0].name, "Home Decoration");
    assert_eq!(categories[1].slug, "beauty");
    assert_eq!(categories[1].name, "Beauty");
}

#[tokio::test]
async fn products_are_decoded_in_order() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(&products_body(5, 3)))
        .await;
    let client = client_for(&api.base_url());

    let products = client.products(&query(12, "", "")).await.unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 6, 7]);
    assert_eq!(products[0].stock, 5);
}

#[tokio::test]
async fn category_with_reserved_characters_is_one_segment() {
    let api = MockApi::start().await;
    let client = client_for(&api.base_url());

    client
        .products(&query(12, "home decor/outdoor", ""))
        .await
        .unwrap();

    assert_eq!(
        api.product_targets().await,
        vec!["/products/category/home%20decor%2Foutdoor?limit=12"]
    );
}

#[tokio::test]
async fn search_text_is_percent_encoded() {
    let api = MockApi::start().await;
    let client = client_for(&api.base_url());

    client
        .products(&query(36, "", "red & blue"))
        .await
        .unwrap();

    assert_eq!(
        api.product_targets().await,
        vec!["/products/search?q=red%20%26%20blue&limit=36"]
    );
}

#[tokio::test]
async fn base_path_is_preserved() {
    let api = MockApi::start().await;
    let client = client_for(&format!("{}/api/", api.base_url()));

    client.products(&query(12, "", "")).await.unwrap();

    let requests = api.captured_requests().await;
    assert_eq!(requests[0].target(), "/api/products?limit=12");
    assert_eq!(requests[0].method, "GET");
}

#[tokio::test]
async fn error_status_is_reported() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::error(404, "not found"))
        .await;
    let client = client_for(&api.base_url());

    let err = client.products(&query(12, "", "")).await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.kind(), "status_error");
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::html("<!doctype html><p>oops</p>"))
        .await;
    let client = client_for(&api.base_url());

    let err = client.categories().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    let client = client_for(&format!("http://127.0.0.1:{}", common::free_port()));

    let err = client.products(&query(12, "", "")).await.unwrap_err();

    assert_eq!(err.kind(), "connection_error");
}

#[test]
fn opaque_base_url_is_rejected() {
    let err = CatalogClient::new(&ApiConfig {
        base_url: "mailto:shop@example.com".to_string(),
        connect_timeout_seconds: 1,
    })
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
}
