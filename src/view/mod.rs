//! Render-ready view models shared by the HTML and terminal renderers.

mod card;
mod grid;

pub use card::{truncate_title, CardView, DetailLinks, StarRating};
pub use grid::{GridView, FAILED_MESSAGE, NO_RESULTS_MESSAGE};
