//! Author repository

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Tables, next_id};

/// Author record held in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
}

/// Input for creating an author
#[derive(Debug)]
pub struct CreateAuthor {
    pub name: String,
}

pub struct AuthorRepository {
    tables: Arc<RwLock<Tables>>,
}

impl AuthorRepository {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }

    /// Get all authors in insertion order
    pub fn list(&self) -> Vec<AuthorRecord> {
        self.tables.read().authors.clone()
    }

    /// Get an author by ID. Duplicate IDs resolve to the first inserted record.
    pub fn get_by_id(&self, id: i32) -> Option<AuthorRecord> {
        self.tables
            .read()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    /// Number of authors currently stored
    pub fn count(&self) -> usize {
        self.tables.read().authors.len()
    }

    /// Append a new author. Names are not required to be unique.
    pub fn create(&self, input: CreateAuthor) -> AuthorRecord {
        let mut tables = self.tables.write();
        let record = AuthorRecord {
            id: next_id(tables.authors.len()),
            name: input.name,
        };
        tables.authors.push(record.clone());
        drop(tables);

        tracing::info!(author_id = record.id, author_name = %record.name, "Author created");
        record
    }
}
