use super::engine::{SearchService, execute_search};
use super::error::SearchError;
use super::types::{ErrorResponse, PaginatedResponse, SearchRequest};
use crate::gateway::types::SearchGateway;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use std::sync::Arc;
use tracing::Instrument;

/// Public search endpoint.
pub const ENDPOINT_SEARCH: &str = "/search";
/// Legacy path used behind the API gateway; served as an alias.
pub const ENDPOINT_API_SEARCH: &str = "/api/search";

pub const WELCOME_MESSAGE: &str = "Welcome to the Tender Tool Search";

/// Builds the HTTP router for a search service.
pub fn router<G: SearchGateway>(service: Arc<SearchService<G>>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route(ENDPOINT_SEARCH, post(handle_search::<G>))
        .route(ENDPOINT_API_SEARCH, post(handle_search::<G>))
        .layer(Extension(service))
}

pub async fn handle_root() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn handle_search<G: SearchGateway>(
    Extension(service): Extension<Arc<SearchService<G>>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<PaginatedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("search", %request_id);

    async move {
        tracing::info!(
            "Search request received. Query: '{}', Page: {}, Size: {}",
            req.query,
            req.page,
            req.page_size
        );

        match execute_search(&service, &req).await {
            Ok(response) => {
                tracing::info!(
                    "Search successful. Found {} results. Returning page {} of {}.",
                    response.total_results,
                    response.page,
                    response.total_pages
                );
                Ok(Json(response))
            }
            Err(err) => {
                match &err {
                    SearchError::EngineInvalidQuery { diagnostic } => {
                        tracing::error!("OpenSearch query failed: {}", diagnostic);
                    }
                    SearchError::UnexpectedFailure { cause } => {
                        tracing::error!("An unexpected error occurred during search: {:?}", cause);
                    }
                }
                Err((
                    err.status_code(),
                    Json(ErrorResponse {
                        message: err.client_message(),
                    }),
                ))
            }
        }
    }
    .instrument(span)
    .await
}
