use crate::graphql::prelude::*;

#[derive(Default)]
pub struct FilmMutations;

#[Object]
impl FilmMutations {
    /// Add a film
    async fn add_film(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> Result<Option<Film>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        let record = catalog.add_film(name, author_id);

        tracing::info!(film_id = record.id, author_id, "Film added via GraphQL");

        Ok(Some(Film::from(record)))
    }
}
