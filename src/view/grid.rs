use crate::catalog::Product;
use crate::view::card::{CardView, DetailLinks};

pub const NO_RESULTS_MESSAGE: &str = "No products found.";
pub const FAILED_MESSAGE: &str = "Failed to load products.";

/// Content of the product display area.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GridView {
    /// Cleared while a request is in flight, or before the first one.
    #[default]
    Blank,
    /// One card per product, in API order.
    Products(Vec<CardView>),
    NoResults,
    Failed,
}

impl GridView {
    /// Builds the whole grid in one pass.
    pub fn from_products(products: &[Product], links: &DetailLinks) -> Self {
        if products.is_empty() {
            return GridView::NoResults;
        }
        GridView::Products(
            products
                .iter()
                .map(|product| CardView::new(product, links))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Products(cards) => cards,
            _ => &[],
        }
    }

    /// The single message shown instead of cards, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridView::NoResults => Some(NO_RESULTS_MESSAGE),
            GridView::Failed => Some(FAILED_MESSAGE),
            GridView::Blank | GridView::Products(_) => None,
        }
    }
}
