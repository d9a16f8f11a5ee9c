use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Categories,
    Search,
}

/// Input widgets of the page, independent of what has been fetched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlsState {
    pub focus: Focus,
    pub search_input: String,
    /// 0 is "All Categories", `n` is the n-th loaded category.
    pub category_cursor: usize,
    /// First visible card row.
    pub scroll: usize,
    pub menu_open: bool,
}

impl UiState for ControlsState {}
