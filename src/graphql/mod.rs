//! GraphQL API
//!
//! This module provides a GraphQL API using async-graphql with queries for reading
//! the catalog and mutations for appending to it.
//!
//! This is the single API surface for the catalog. Resolvers live in
//! `queries/` and `mutations/`, one struct per entity, merged into the
//! root objects in `schema.rs`.

pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{CatalogSchema, build_schema};

/// Imports shared by the query and mutation resolver modules
pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::CatalogService;
}
