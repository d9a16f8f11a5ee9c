use crate::mvi::Reducer;
use crate::page::{PageIntent, PageModel, Storefront};
use crate::ui::controls::{ControlsIntent, ControlsReducer, ControlsState};
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    storefront: Storefront,
    runtime: Handle,
    /// Input widgets (MVI pattern).
    controls: ControlsState,
    /// Latest page snapshot, refreshed every tick.
    page: PageModel,
    /// Card rows that fit in the body, set by the renderer's layout.
    visible_rows: usize,
    columns: usize,
}

impl App {
    pub fn new(storefront: Storefront, runtime: Handle) -> Self {
        let page = storefront.snapshot();
        Self {
            should_quit: false,
            storefront,
            runtime,
            controls: ControlsState::default(),
            page,
            visible_rows: 1,
            columns: 1,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    /// Loads categories and the first page in the background.
    pub fn start(&self) {
        let storefront = self.storefront.clone();
        self.runtime.spawn(async move {
            storefront.init().await;
        });
    }

    pub fn on_tick(&mut self) {
        let page = self.storefront.snapshot();
        self.apply_snapshot(page);
    }

    /// Replaces the page snapshot. A new fetch cycle scrolls back to the top;
    /// otherwise the offset is kept within the current grid.
    fn apply_snapshot(&mut self, page: PageModel) {
        let replaced = page.generation != self.page.generation;
        self.page = page;
        if replaced && self.controls.scroll != 0 {
            self.dispatch_controls(ControlsIntent::ScrollTo { row: 0 });
        }
        self.clamp_scroll();
    }

    /// Records the grid geometry of the current terminal size.
    pub fn on_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.controls.scroll > max {
            self.dispatch_controls(ControlsIntent::ScrollTo { row: max });
        }
    }

    pub fn dispatch_controls(&mut self, intent: ControlsIntent) {
        dispatch_mvi!(self, controls, ControlsReducer, intent);
    }

    /// Runs a page intent as its own task. Overlapping dispatches are
    /// resolved by the storefront's generation check.
    pub fn dispatch_page(&mut self, intent: PageIntent) {
        let storefront = self.storefront.clone();
        self.runtime.spawn(async move {
            storefront.dispatch(intent).await;
        });
    }

    pub fn load_more(&mut self) {
        self.dispatch_page(PageIntent::LoadMore);
    }

    pub fn submit_search(&mut self) {
        let input = self.controls.search_input.clone();
        self.dispatch_page(PageIntent::Search { input });
        self.dispatch_controls(ControlsIntent::FocusGrid);
    }

    pub fn select_category(&mut self) {
        let category = self.selected_category_slug();
        self.dispatch_page(PageIntent::SelectCategory { category });
    }

    pub fn clear_filters(&mut self) {
        self.dispatch_controls(ControlsIntent::Reset);
        self.dispatch_page(PageIntent::ClearFilters);
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch_controls(ControlsIntent::ToggleMenu);
    }

    pub fn move_category(&mut self, forward: bool) {
        let options = self.category_options();
        if forward {
            self.dispatch_controls(ControlsIntent::CategoryNext { options });
        } else {
            self.dispatch_controls(ControlsIntent::CategoryPrev { options });
        }
    }

    pub fn scroll(&mut self, down: bool) {
        if down {
            let max = self.max_scroll();
            self.dispatch_controls(ControlsIntent::ScrollDown { max });
        } else {
            self.dispatch_controls(ControlsIntent::ScrollUp);
        }
    }

    /// Label under the category cursor.
    pub fn category_label(&self) -> &str {
        match self.controls.category_cursor {
            0 => "All Categories",
            n => self
                .page
                .categories
                .get(n - 1)
                .map(|category| category.name.as_str())
                .unwrap_or("All Categories"),
        }
    }

    /// Slug under the category cursor; empty for "All Categories".
    fn selected_category_slug(&self) -> String {
        match self.controls.category_cursor {
            0 => String::new(),
            n => self
                .page
                .categories
                .get(n - 1)
                .map(|category| category.slug.clone())
                .unwrap_or_default(),
        }
    }

    fn category_options(&self) -> usize {
        self.page.categories.len() + 1
    }

    fn max_scroll(&self) -> usize {
        let cards = self.page.grid.cards().len();
        let rows = cards.div_ceil(self.columns);
        rows.saturating_sub(self.visible_rows)
    }
}
