//! Catalog service
//!
//! Answers the read queries and performs the two append operations on top of the
//! record store. Relations between films and authors are resolved on demand by
//! scanning the other collection, so nothing here is cached between calls.

use std::sync::Arc;

use tracing::debug;

use crate::db::{AuthorRecord, CreateAuthor, CreateFilm, Database, FilmRecord};

pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Find a film by ID. A missing ID never matches.
    pub fn find_film(&self, id: Option<i32>) -> Option<FilmRecord> {
        let film = id.and_then(|id| self.db.films().get_by_id(id));
        debug!(film_id = ?id, found = film.is_some(), "Film lookup");
        film
    }

    /// Every film in store order
    pub fn find_all_films(&self) -> Vec<FilmRecord> {
        self.db.films().list()
    }

    /// Find an author by ID. A missing ID never matches.
    pub fn find_author(&self, id: Option<i32>) -> Option<AuthorRecord> {
        let author = id.and_then(|id| self.db.authors().get_by_id(id));
        debug!(author_id = ?id, found = author.is_some(), "Author lookup");
        author
    }

    /// Every author in store order
    pub fn find_all_authors(&self) -> Vec<AuthorRecord> {
        self.db.authors().list()
    }

    /// The author a film points at, or `None` when the reference dangles
    pub fn resolve_author_of(&self, film: &FilmRecord) -> Option<AuthorRecord> {
        self.db.authors().get_by_id(film.author_id)
    }

    /// Films written by `author`, in store order
    pub fn resolve_films_of(&self, author: &AuthorRecord) -> Vec<FilmRecord> {
        self.db.films().list_by_author(author.id)
    }

    pub fn add_film(&self, name: String, author_id: i32) -> FilmRecord {
        self.db.films().create(CreateFilm { name, author_id })
    }

    pub fn add_author(&self, name: String) -> AuthorRecord {
        self.db.authors().create(CreateAuthor { name })
    }
}

/// Create a shared catalog service
pub fn create_catalog_service(db: Database) -> Arc<CatalogService> {
    Arc::new(CatalogService::new(db))
}
