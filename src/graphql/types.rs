//! GraphQL type definitions
//!
//! Each type wraps its store record. Relation fields are resolved lazily, only
//! when the client selects them.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::db::{AuthorRecord, FilmRecord};
use crate::services::CatalogService;

#[derive(Debug, Clone)]
pub struct Film(pub FilmRecord);

impl From<FilmRecord> for Film {
    fn from(record: FilmRecord) -> Self {
        Self(record)
    }
}

/// This represents a film written by an author
#[Object]
impl Film {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The film's author, or null if `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(catalog.resolve_author_of(&self.0).map(Author::from))
    }
}

#[derive(Debug, Clone)]
pub struct Author(pub AuthorRecord);

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        Self(record)
    }
}

/// This represents a author of a film
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Films whose `authorId` is this author
    async fn films(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Film>>>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(nullable_list(catalog.resolve_films_of(&self.0)))
    }
}

/// Wrap records as a GraphQL list whose items are nullable (`[T]`), the shape
/// every list field in the schema exposes
pub fn nullable_list<R, T: From<R>>(records: Vec<R>) -> Option<Vec<Option<T>>> {
    Some(records.into_iter().map(|r| Some(T::from(r))).collect())
}
