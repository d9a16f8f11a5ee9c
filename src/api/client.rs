use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::query::{Endpoints, ProductQuery};
use crate::catalog::{Category, Product, ProductPage};
use crate::config::ApiConfig;

/// Client for the product API.
///
/// Cheap to clone; clones share the underlying connection pool. No total
/// request timeout and no retries are applied: a failed attempt is reported
/// to the caller as is.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoints: Endpoints,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let endpoints = Endpoints::new(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::Connection {
                url: config.base_url.clone(),
                source: e,
            })?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches the category list.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.endpoints.categories()).await
    }

    /// Fetches the products selected by `query`.
    pub async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoints.products(query);
        let body: serde_json::Value = self.get_json(url.clone()).await?;
        let page = ProductPage::from_value(body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })?;
        Ok(page.products)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
