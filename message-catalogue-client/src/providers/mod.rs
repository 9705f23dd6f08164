//! Catalogue endpoint implementations

/// Shared utilities used by client implementations.
pub mod common;

mod endpoint;

pub use endpoint::HttpCatalogueClient;
