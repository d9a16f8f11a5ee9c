use crate::mvi::Reducer;

use super::intent::ControlsIntent;
use super::state::{ControlsState, Focus};

pub struct ControlsReducer;

impl Reducer for ControlsReducer {
    type State = ControlsState;
    type Intent = ControlsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ControlsIntent::FocusNext => {
                let focus = match state.focus {
                    Focus::Grid => Focus::Categories,
                    Focus::Categories => Focus::Search,
                    Focus::Search => Focus::Grid,
                };
                ControlsState { focus, ..state }
            }
            ControlsIntent::FocusSearch => ControlsState {
                focus: Focus::Search,
                ..state
            },
            ControlsIntent::FocusGrid => ControlsState {
                focus: Focus::Grid,
                ..state
            },
            ControlsIntent::Type(ch) => {
                let mut state = state;
                if state.focus == Focus::Search && !ch.is_control() {
                    state.search_input.push(ch);
                }
                state
            }
            ControlsIntent::Backspace => {
                let mut state = state;
                if state.focus == Focus::Search {
                    state.search_input.pop();
                }
                state
            }
            ControlsIntent::CategoryPrev { options } => {
                let category_cursor = if options == 0 {
                    0
                } else if state.category_cursor == 0 {
                    options - 1
                } else {
                    state.category_cursor.min(options) - 1
                };
                ControlsState {
                    category_cursor,
                    ..state
                }
            }
            ControlsIntent::CategoryNext { options } => {
                let category_cursor = if state.category_cursor + 1 >= options {
                    0
                } else {
                    state.category_cursor + 1
                };
                ControlsState {
                    category_cursor,
                    ..state
                }
            }
            ControlsIntent::ScrollUp => ControlsState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            ControlsIntent::ScrollDown { max } => ControlsState {
                scroll: (state.scroll + 1).min(max),
                ..state
            },
            ControlsIntent::ScrollTo { row } => ControlsState {
                scroll: row,
                ..state
            },
            ControlsIntent::ToggleMenu => ControlsState {
                menu_open: !state.menu_open,
                ..state
            },
            ControlsIntent::Reset => ControlsState {
                focus: state.focus,
                menu_open: state.menu_open,
                ..ControlsState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_only_reaches_focused_search() {
        let state = ControlsReducer::reduce(ControlsState::default(), ControlsIntent::Type('x'));
        assert!(state.search_input.is_empty());

        let state = ControlsReducer::reduce(state, ControlsIntent::FocusSearch);
        let state = ControlsReducer::reduce(state, ControlsIntent::Type('x'));
        assert_eq!(state.search_input, "x");
    }

    #[test]
    fn category_cursor_wraps_both_ways() {
        let state = ControlsReducer::reduce(
            ControlsState::default(),
            ControlsIntent::CategoryPrev { options: 3 },
        );
        assert_eq!(state.category_cursor, 2);
        let state = ControlsReducer::reduce(state, ControlsIntent::CategoryNext { options: 3 });
        assert_eq!(state.category_cursor, 0);
    }

    #[test]
    fn scroll_to_moves_the_offset() {
        let state = ControlsState {
            scroll: 5,
            ..ControlsState::default()
        };
        let state = ControlsReducer::reduce(state, ControlsIntent::ScrollTo { row: 0 });
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn reset_clears_inputs_but_keeps_menu() {
        let state = ControlsState {
            focus: Focus::Search,
            search_input: "phone".to_string(),
            category_cursor: 4,
            scroll: 2,
            menu_open: true,
        };
        let state = ControlsReducer::reduce(state, ControlsIntent::Reset);
        assert!(state.search_input.is_empty());
        assert_eq!(state.category_cursor, 0);
        assert_eq!(state.scroll, 0);
        assert!(state.menu_open);
        assert_eq!(state.focus, Focus::Search);
    }
}
