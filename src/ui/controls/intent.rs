use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ControlsIntent {
    /// Tab: grid → categories → search → grid.
    FocusNext,
    FocusSearch,
    FocusGrid,
    /// Character typed into the search field.
    Type(char),
    Backspace,
    /// Move the category cursor; `options` counts "All Categories" too.
    CategoryPrev { options: usize },
    CategoryNext { options: usize },
    ScrollUp,
    ScrollDown { max: usize },
    /// Jump to a row; used when the grid is replaced or shrinks.
    ScrollTo { row: usize },
    /// Mobile menu toggle. Presentational only.
    ToggleMenu,
    /// Clear filters: empty search field, "All Categories", top of the grid.
    Reset,
}

impl Intent for ControlsIntent {}
