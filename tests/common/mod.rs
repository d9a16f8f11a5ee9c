//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::net::TcpListener;
use std::path::PathBuf;

use serde_json::json;
use storefront::api::CatalogClient;
use storefront::config::ApiConfig;
use storefront::page::Storefront;
use storefront::view::DetailLinks;
use tempfile::TempDir;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

/// Find an available port for testing. Nothing listens on it afterwards.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
    })
    .expect("Failed to build client")
}

/// Storefront talking to `base_url`, with an empty cart.
pub fn storefront_for(base_url: &str) -> Storefront {
    Storefront::new(client_for(base_url), DetailLinks::default(), 0)
}

/// Storefront pointed at a port nobody listens on.
pub fn unreachable_storefront() -> Storefront {
    storefront_for(&format!("http://127.0.0.1:{}", free_port()))
}

// -- JSON fixtures ------------------------------------------------------------

pub fn product_json(id: u64, title: &str, discount: f64, rating: f64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": 9.99,
        "thumbnail": format!("https://cdn.example.com/{}.png", id),
        "discountPercentage": discount,
        "stock": 5,
        "rating": rating,
        "brand": "ignored"
    })
}

/// `{"products": [...]}` with `count` generic products starting at `first_id`.
pub fn products_body(first_id: u64, count: u64) -> String {
    let products: Vec<_> = (first_id..first_id + count)
        .map(|id| product_json(id, &format!("Product {}", id), 0.0, 4.0))
        .collect();
    json!({ "products": products, "total": 194, "skip": 0, "limit": count }).to_string()
}

pub fn categories_body(slugs: &[&str]) -> String {
    let categories: Vec<_> = slugs
        .iter()
        .map(|slug| json!({ "slug": slug, "name": slug.to_uppercase(), "url": "" }))
        .collect();
    serde_json::Value::Array(categories).to_string()
}

/// Create a temporary file with `content` and return its path.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
