pub mod authors;
pub mod films;

pub use authors::AuthorMutations;
pub use films::FilmMutations;
