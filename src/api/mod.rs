//! HTTP access to the product API.

mod client;
mod error;
mod query;

pub use client::CatalogClient;
pub use error::ApiError;
pub use query::{Endpoints, ProductQuery, RetrievalMode};
