//! Film repository

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Tables, next_id};

/// Film record held in the store
///
/// `author_id` is not checked against the author collection and may dangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

/// Input for creating a film
#[derive(Debug)]
pub struct CreateFilm {
    pub name: String,
    pub author_id: i32,
}

pub struct FilmRepository {
    tables: Arc<RwLock<Tables>>,
}

impl FilmRepository {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }

    /// Get all films in insertion order
    pub fn list(&self) -> Vec<FilmRecord> {
        self.tables.read().films.clone()
    }

    /// Get a film by ID. Duplicate IDs resolve to the first inserted record.
    pub fn get_by_id(&self, id: i32) -> Option<FilmRecord> {
        self.tables
            .read()
            .films
            .iter()
            .find(|film| film.id == id)
            .cloned()
    }

    /// Get every film referencing the given author, in insertion order
    pub fn list_by_author(&self, author_id: i32) -> Vec<FilmRecord> {
        self.tables
            .read()
            .films
            .iter()
            .filter(|film| film.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Number of films currently stored
    pub fn count(&self) -> usize {
        self.tables.read().films.len()
    }

    /// Append a new film
    pub fn create(&self, input: CreateFilm) -> FilmRecord {
        let mut tables = self.tables.write();
        let record = FilmRecord {
            id: next_id(tables.films.len()),
            name: input.name,
            author_id: input.author_id,
        };
        tables.films.push(record.clone());
        drop(tables);

        tracing::info!(
            film_id = record.id,
            film_name = %record.name,
            author_id = record.author_id,
            "Film created"
        );
        record
    }
}
