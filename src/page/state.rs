use crate::api::ProductQuery;
use crate::catalog::Product;
use crate::mvi::UiState;

/// Step by which "load more" grows the limit, and the limit of a fresh page.
pub const PAGE_SIZE: usize = 12;

/// Current filter and pagination selections plus the last fetched products.
///
/// Fields are only written by [`ViewReducer`](super::ViewReducer), so `limit`
/// can only grow by [`PAGE_SIZE`] or return to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub(super) limit: usize,
    pub(super) category: String,
    pub(super) query: String,
    pub(super) last_results: Vec<Product>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            limit: PAGE_SIZE,
            category: String::new(),
            query: String::new(),
            last_results: Vec::new(),
        }
    }
}

impl UiState for ViewState {}

impl ViewState {
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Selected category slug; empty means all categories.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Search text; empty means no search.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_results(&self) -> &[Product] {
        &self.last_results
    }

    pub fn has_filters(&self) -> bool {
        !self.category.is_empty() || !self.query.is_empty()
    }

    /// The request this state asks for.
    pub fn product_query(&self) -> ProductQuery {
        ProductQuery {
            limit: self.limit,
            category: self.category.clone(),
            query: self.query.clone(),
        }
    }
}
