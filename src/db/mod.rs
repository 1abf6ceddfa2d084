//! In-memory record store
//!
//! Two append-only collections (authors and films) live behind a single lock.
//! Access goes through per-collection repositories, so callers never touch the
//! lock directly.

pub mod authors;
pub mod films;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;

pub use authors::{AuthorRecord, AuthorRepository, CreateAuthor};
pub use films::{CreateFilm, FilmRecord, FilmRepository};
pub use seed::seed_catalog;

/// Backing storage shared by all repositories.
///
/// Both vectors are append-only and kept in insertion order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) authors: Vec<AuthorRecord>,
    pub(crate) films: Vec<FilmRecord>,
}

/// Handle to the record store. Cloning is cheap and every clone sees the same data.
#[derive(Clone, Default)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
}

impl Database {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the demo catalog
    pub fn seeded() -> Self {
        let db = Self::new();
        seed_catalog(&db);
        db
    }

    /// Get an author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.tables.clone())
    }

    /// Get a film repository
    pub fn films(&self) -> FilmRepository {
        FilmRepository::new(self.tables.clone())
    }
}

/// Next identifier for a collection currently holding `len` records.
///
/// Must be called with the write lock held so two appends cannot observe the
/// same length.
pub(crate) fn next_id(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}
