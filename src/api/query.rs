//! Request selection and URL building for the product endpoints.

use reqwest::Url;

use crate::api::error::ApiError;

/// Filter and pagination values for one product request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub limit: usize,
    pub category: String,
    pub query: String,
}

/// The single endpoint a product request goes to.
///
/// Search wins over category, category wins over the plain listing. The two
/// filters are never combined in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode<'a> {
    Search { query: &'a str, limit: usize },
    Category { category: &'a str, limit: usize },
    All { limit: usize },
}

impl ProductQuery {
    pub fn mode(&self) -> RetrievalMode<'_> {
        if !self.query.is_empty() {
            RetrievalMode::Search {
                query: &self.query,
                limit: self.limit,
            }
        } else if !self.category.is_empty() {
            RetrievalMode::Category {
                category: &self.category,
                limit: self.limit,
            }
        } else {
            RetrievalMode::All { limit: self.limit }
        }
    }
}

/// URL builder rooted at the API base.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl {
            base: base.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base: base.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        Ok(Self { base })
    }

    /// `GET /products/categories`
    pub fn categories(&self) -> Url {
        self.with_segments(&["products", "categories"])
    }

    pub fn products(&self, query: &ProductQuery) -> Url {
        match query.mode() {
            RetrievalMode::Search { query, limit } => {
                let mut url = self.with_segments(&["products", "search"]);
                // Percent-encoded like a path segment: a space is `%20`, never `+`.
                url.set_query(Some(&format!(
                    "q={}&limit={}",
                    urlencoding::encode(query),
                    limit
                )));
                url
            }
            RetrievalMode::Category { category, limit } => {
                let mut url = self.with_segments(&["products", "category", category]);
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string());
                url
            }
            RetrievalMode::All { limit } => {
                let mut url = self.with_segments(&["products"]);
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string());
                url
            }
        }
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // cannot_be_a_base was rejected in new(), so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
