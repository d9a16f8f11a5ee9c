use crate::mvi::Reducer;

use super::intent::PageIntent;
use super::state::{ViewState, PAGE_SIZE};

/// Reducer for the page's view state.
///
/// Pure function: fetching, rendering and the loading indicator are handled
/// by [`Storefront`](super::Storefront) around the dispatch.
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = PageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::Reload => state,
            PageIntent::LoadMore => ViewState {
                limit: state.limit.saturating_add(PAGE_SIZE),
                ..state
            },
            PageIntent::Search { input } => ViewState {
                query: input.trim().to_string(),
                ..state
            },
            PageIntent::SelectCategory { category } => ViewState { category, ..state },
            PageIntent::ClearFilters => ViewState {
                last_results: state.last_results,
                ..ViewState::default()
            },
            PageIntent::ResultsLoaded { products } => ViewState {
                last_results: products,
                ..state
            },
        }
    }
}
