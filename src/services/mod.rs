//! Application services

pub mod catalog;

pub use catalog::{CatalogService, create_catalog_service};
