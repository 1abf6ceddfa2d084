//! Application state and HTTP router construction.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::db::Database;
use crate::graphql::CatalogSchema;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub schema: CatalogSchema,
}

/// Build the full Axum router: probes, /graphql and layers.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::health::router())
        .route("/graphql", get(graphql_get).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Query string parameters read alongside the GraphQL request
#[derive(Deserialize)]
struct GetParams {
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
}

/// GET handler: runs query operations from the query string, otherwise serves
/// the GraphiQL console to browsers
async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<GetParams>,
    req: GraphQLRequest,
) -> Response {
    let mut request = req.into_inner();
    if request.operation_name.is_none() {
        request.operation_name = params.operation_name;
    }

    if request.query.is_empty() {
        let accepts_html = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("text/html"))
            .unwrap_or(false);

        if accepts_html && state.config.graphiql_enabled {
            return Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response();
        }
        return graphql_error(StatusCode::BAD_REQUEST, "Must provide query string.");
    }

    if selects_mutation(&request) {
        tracing::debug!("Rejected mutation sent over GET");
        let mut response = graphql_error(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
        return response;
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

/// Whether the operation a request would run is a mutation.
///
/// Unparseable documents return false; execution reports the syntax error.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    let wanted = request.operation_name.as_deref();

    document
        .operations
        .iter()
        .find(|(name, _)| match wanted {
            Some(wanted) => name.map(|n| n.as_str()) == Some(wanted),
            None => true,
        })
        .is_some_and(|(_, operation)| matches!(operation.node.ty, OperationType::Mutation))
}

/// Error body in GraphQL response shape
fn graphql_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "errors": [{ "message": message }] })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::services::create_catalog_service;
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_state(config: Config) -> AppState {
        let db = Database::seeded();
        let schema = build_schema(create_catalog_service(db.clone()));
        AppState {
            config: Arc::new(config),
            db,
            schema,
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn graphql_post(query: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_query() {
        let app = build_app(test_state(Config::default()));

        let response = app
            .oneshot(graphql_post("{ author(id: 3) { name films { id } } }"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "data": {
                    "author": { "name": "C. S. Lewis", "films": [{ "id": 6 }, { "id": 7 }] }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_post_missing_argument_returns_errors() {
        let app = build_app(test_state(Config::default()));

        let response = app
            .oneshot(graphql_post("mutation { addAuthor { id } }"))
            .await
            .unwrap();

        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert!(!errors.is_empty());
        assert!(errors[0]["message"].is_string());
    }

    #[tokio::test]
    async fn test_mutation_visible_to_later_requests() {
        let state = test_state(Config::default());

        build_app(state.clone())
            .oneshot(graphql_post(r#"mutation { addAuthor(name: "Hayao Miyazaki") { id } }"#))
            .await
            .unwrap();

        let response = build_app(state)
            .oneshot(graphql_post("{ author(id: 5) { name } }"))
            .await
            .unwrap();

        assert_eq!(
            body_json(response).await,
            json!({ "data": { "author": { "name": "Hayao Miyazaki" } } })
        );
    }

    #[tokio::test]
    async fn test_graphiql_served_to_browsers() {
        let app = build_app(test_state(Config::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/graphql")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_graphiql_disabled() {
        let config = Config {
            graphiql_enabled: false,
            ..Config::default()
        };
        let app = build_app(test_state(config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/graphql")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "errors": [{ "message": "Must provide query string." }] })
        );
    }

    fn graphql_get_request(query_string: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/graphql?{query_string}"))
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_query_executes() {
        let app = build_app(test_state(Config::default()));

        let response = app
            .oneshot(graphql_get_request("query=%7Bfilms%7Bid%7D%7D"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["films"].as_array().map(Vec::len), Some(8));
        assert_eq!(body["data"]["films"][0], json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn test_get_query_with_html_accept_executes() {
        let app = build_app(test_state(Config::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/graphql?query=%7Bauthor(id%3A2)%7Bname%7D%7D")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            body_json(response).await,
            json!({ "data": { "author": { "name": "George R. R. Martin" } } })
        );
    }

    #[tokio::test]
    async fn test_get_mutation_rejected() {
        let state = test_state(Config::default());

        let response = build_app(state.clone())
            .oneshot(graphql_get_request(
                "query=mutation%7BaddAuthor(name%3A%22X%22)%7Bid%7D%7D",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
        let body = body_json(response).await;
        assert!(body["errors"][0]["message"].is_string());
        assert_eq!(state.db.authors().count(), 4);
    }

    #[tokio::test]
    async fn test_get_selects_named_operation() {
        let state = test_state(Config::default());

        // Document holds a mutation too, but only the named query runs
        let response = build_app(state.clone())
            .oneshot(graphql_get_request(
                "query=query%20Q%7Bauthors%7Bid%7D%7D%20mutation%20M%7BaddAuthor(name%3A%22X%22)%7Bid%7D%7D&operationName=Q",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = build_app(state.clone())
            .oneshot(graphql_get_request(
                "query=query%20Q%7Bauthors%7Bid%7D%7D%20mutation%20M%7BaddAuthor(name%3A%22X%22)%7Bid%7D%7D&operationName=M",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(state.db.authors().count(), 4);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = test_state(Config::default());

        let response = build_app(state.clone())
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");

        let response = build_app(state)
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({ "ready": true, "authors": 4, "films": 8 })
        );
    }
}
