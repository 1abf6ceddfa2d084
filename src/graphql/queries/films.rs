use crate::graphql::prelude::*;

#[derive(Default)]
pub struct FilmQueries;

#[Object]
impl FilmQueries {
    /// A Single Film
    async fn film(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Film>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(catalog.find_film(id).map(Film::from))
    }

    /// List of All Films
    async fn films(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Film>>>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(nullable_list(catalog.find_all_films()))
    }
}
