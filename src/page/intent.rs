use crate::catalog::Product;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PageIntent {
    /// Fetch again with the current selections (initial load).
    Reload,
    /// "View all": grow the limit by one page.
    LoadMore,
    /// Search submitted; the input is trimmed by the reducer.
    Search { input: String },
    /// Category selector changed; empty selects all categories.
    SelectCategory { category: String },
    ClearFilters,
    /// A product request settled successfully.
    ResultsLoaded { products: Vec<Product> },
}

impl Intent for PageIntent {}

impl PageIntent {
    /// Whether applying this intent starts a fetch-and-render cycle.
    pub fn triggers_fetch(&self) -> bool {
        !matches!(self, PageIntent::ResultsLoaded { .. })
    }
}
