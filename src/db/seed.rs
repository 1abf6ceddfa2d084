//! Pre-seed data for the demo catalog.
//!
//! Seeding only runs against empty collections, so calling it twice leaves the
//! store unchanged.

use tracing::{debug, info};

use super::{CreateAuthor, CreateFilm, Database};

/// Result of running seed operations.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedResult {
    pub authors_inserted: usize,
    pub films_inserted: usize,
}

const AUTHORS: &[&str] = &[
    "Stan Lee",
    "George R. R. Martin",
    "C. S. Lewis",
    "Eiichiro Oda",
];

/// (name, author id)
const FILMS: &[(&str, i32)] = &[
    ("Captain America: The First Avenger", 1),
    ("Guardians of the Galaxy", 1),
    ("Doctor Strange", 1),
    ("Captain Marvel", 1),
    ("Game of Thrones", 2),
    (
        "The Chronicles of Narnia: The Lion, the Witch and the Wardrobe",
        3,
    ),
    ("The Chronicles of Narnia: Prince Caspian", 3),
    ("One Piece Film: Red", 4),
];

/// Insert the demo authors and films into any collection that is still empty.
pub fn seed_catalog(db: &Database) -> SeedResult {
    let mut result = SeedResult::default();

    let authors = db.authors();
    if authors.count() == 0 {
        for name in AUTHORS {
            authors.create(CreateAuthor {
                name: (*name).to_string(),
            });
            result.authors_inserted += 1;
        }
    } else {
        debug!("Authors already present, skipping seed");
    }

    let films = db.films();
    if films.count() == 0 {
        for (name, author_id) in FILMS {
            films.create(CreateFilm {
                name: (*name).to_string(),
                author_id: *author_id,
            });
            result.films_inserted += 1;
        }
    } else {
        debug!("Films already present, skipping seed");
    }

    info!(
        authors = result.authors_inserted,
        films = result.films_inserted,
        "Catalog seeded"
    );
    result
}
