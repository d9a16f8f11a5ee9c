//! Catalog data as served by the product API.

mod types;

pub use types::{Category, Product, ProductPage};
