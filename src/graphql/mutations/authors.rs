use crate::graphql::prelude::*;

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Option<Author>> {
        let catalog = ctx.data_unchecked::<Arc<CatalogService>>();
        let record = catalog.add_author(name);

        tracing::info!(author_id = record.id, "Author added via GraphQL");

        Ok(Some(Author::from(record)))
    }
}
