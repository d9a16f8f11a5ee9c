use crate::catalog::Category;
use crate::view::GridView;

use super::state::ViewState;

/// Where the page is in its fetch-and-render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Rendered,
    Errored,
}

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageModel {
    pub view: ViewState,
    pub grid: GridView,
    /// Loading indicator visibility.
    pub loading: bool,
    /// Selector options after "All Categories".
    pub categories: Vec<Category>,
    pub cart_count: usize,
    /// Id of the most recent fetch-and-render cycle.
    pub generation: u64,
}

impl PageModel {
    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            return LoadPhase::Loading;
        }
        match self.grid {
            GridView::Blank => LoadPhase::Idle,
            GridView::Failed => LoadPhase::Errored,
            GridView::Products(_) | GridView::NoResults => LoadPhase::Rendered,
        }
    }
}
