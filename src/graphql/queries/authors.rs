use crate::graphql::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(catalog.find_author(id).map(Author::from))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        Ok(nullable_list(catalog.find_all_authors()))
    }
}
