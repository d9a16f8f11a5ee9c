//! HTML rendering of the storefront.
//!
//! Dynamic values reach the output only through [`Markup::text`], which
//! escapes them; verbatim HTML is limited to `&'static str` literals.

mod builder;
mod html;

pub use builder::{escape, Markup};
pub use html::{render_card, render_category_options, render_grid, render_page, render_stars};
