//! Terminal storefront over a public product catalog API.
//!
//! The [`page::Storefront`] controller fetches products through
//! [`api::CatalogClient`], keeps the page state in a reducer-driven model and
//! exposes snapshots that the terminal UI ([`ui`]) and the HTML renderer
//! ([`markup`]) draw from.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod markup;
pub mod mvi;
pub mod page;
pub mod ui;
pub mod view;
