use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every section is optional in the file; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Product API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product API (e.g., "https://dummyjson.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Page presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Target of the per-product links (e.g., "product.html").
    #[serde(default = "default_detail_page")]
    pub detail_page: String,
}

/// Location of the persisted key-value store holding the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file. Defaults to `<data_dir>/storefront/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key of the serialized cart list (default: "shop_cart").
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to `<data_dir>/storefront/storefront.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_detail_page() -> String {
    "product.html".to_string()
}

fn default_cart_key() -> String {
    "shop_cart".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            detail_page: default_detail_page(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            cart_key: default_cart_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl StorageConfig {
    /// Resolved store path.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| data_dir().join("storage.json"))
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn resolved_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join("storefront.log"))
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront")
}
