pub mod authors;
pub mod films;

pub use authors::AuthorQueries;
pub use films::FilmQueries;
