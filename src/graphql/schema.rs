//! GraphQL schema definition with queries and mutations
//!
//! Root objects merge the per-entity resolver structs, so each operation name maps
//! to exactly one resolver.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::services::CatalogService;

use super::mutations::{AuthorMutations, FilmMutations};
use super::queries::{AuthorQueries, FilmQueries};

/// Root Query
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(FilmQueries, AuthorQueries);

/// Root Mutation
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(FilmMutations, AuthorMutations);

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with all resolvers
pub fn build_schema(catalog: Arc<CatalogService>) -> CatalogSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .extension(Tracing)
        .data(catalog)
        .finish()
}
