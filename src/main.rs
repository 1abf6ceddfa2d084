//! Film Catalog - GraphQL demo service
//!
//! Serves an in-memory catalog of authors and films. All operations are exposed
//! via GraphQL at /graphql.

mod api;
mod app;
mod config;
mod db;
mod graphql;
mod services;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::AppState;
use crate::config::Config;
use crate::db::Database;
use crate::services::create_catalog_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "film_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting Film Catalog");
    tracing::info!(?config, "Configuration loaded");

    let db = if config.seed_data {
        Database::seeded()
    } else {
        Database::new()
    };
    tracing::info!(
        authors = db.authors().count(),
        films = db.films().count(),
        "Record store ready"
    );

    let catalog = create_catalog_service(db.clone());
    let schema = graphql::build_schema(catalog);
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        db,
        schema,
    };
    let app = app::build_app(state);

    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);
    if config.graphiql_enabled {
        tracing::info!("GraphiQL console: http://localhost:{}/graphql", config.port);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
