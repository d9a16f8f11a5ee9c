mod common;

use std::path::PathBuf;

use common::temp_file;
use storefront::config::{Config, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "https://dummyjson.com");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.page.detail_page, "product.html");
    assert_eq!(config.storage.cart_key, "shop_cart");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[api]
base_url = "http://localhost:3000"

[storage]
path = "/tmp/storefront/storage.json"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(
        config.storage.resolved_path(),
        PathBuf::from("/tmp/storefront/storage.json")
    );
    assert_eq!(config.storage.cart_key, "shop_cart");
    assert_eq!(config.page.detail_page, "product.html");
}

#[test]
fn full_file_is_read() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[api]
base_url = "https://shop.example.com/api"
connect_timeout_seconds = 2

[page]
detail_page = "item.html"

[storage]
cart_key = "cart_v2"

[logging]
level = "debug"
file = "/var/log/storefront.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert_eq!(config.page.detail_page, "item.html");
    assert_eq!(config.storage.cart_key, "cart_v2");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.resolved_file(),
        PathBuf::from("/var/log/storefront.log")
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn non_http_base_url_is_rejected() {
    let (_dir, path) = temp_file("config.toml", "[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp"));
}

#[test]
fn unparseable_base_url_is_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn empty_detail_page_is_rejected() {
    let (_dir, path) = temp_file("config.toml", "[page]\ndetail_page = \"  \"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn empty_cart_key_is_rejected() {
    let mut config = Config::default();
    config.storage.cart_key.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Cart key"));
}

#[test]
fn default_paths_live_under_storefront_dir() {
    let config = Config::default();
    assert!(config.storage.resolved_path().ends_with("storefront/storage.json"));
    assert!(config.logging.resolved_file().ends_with("storefront/storefront.log"));
    assert!(Config::config_path().ends_with("storefront/config.toml"));
}
