//! HTTP server mode demonstrating extraction and response building

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cli::runner::QuerySummary;
use crate::error::{Error, Result};
use crate::query::{Extractor, PaginationQuery};
use crate::response::paginated_response;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Extractor applied to every request
    pub extractor: Extractor,
    /// Number of generated items served by `/items`
    pub items: usize,
}

/// App state shared across handlers
struct AppState {
    config: ServerConfig,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Generated row served by `/items`
#[derive(Debug, Serialize)]
struct Item {
    id: i64,
    name: String,
}

/// Build the router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/query", get(describe_query))
        .route("/items", get(list_items))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Echo the extracted pagination and everything derived from it
async fn describe_query(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match state.config.extractor.extract(&uri) {
        Ok(query) => (
            StatusCode::OK,
            Json(ApiResponse::success(QuerySummary::from(&query))),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Serve one page of the generated items
async fn list_items(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let query = match state.config.extractor.extract(&uri) {
        Ok(query) => query,
        Err(e) => return error_response(&e),
    };
    tracing::debug!(query = %query.query_string(), "Listing items");

    let total = i64::try_from(state.config.items).unwrap_or(i64::MAX);
    let ids = page_of_ids(total, &query);
    let page = paginated_response(total, &query, ids).map(|id| Item {
        id,
        name: format!("item-{id}"),
    });

    (StatusCode::OK, Json(ApiResponse::success(page))).into_response()
}

/// Ids `1..=total` in the requested direction, cut to the query's window.
///
/// Items carry only an id, so every order field sorts by id.
fn page_of_ids(total: i64, query: &PaginationQuery) -> Vec<i64> {
    let skip = usize::try_from(query.offset()).unwrap_or(0);
    let take = usize::try_from(query.limit()).unwrap_or(0);

    if query.order_dir().is_ascending() {
        (1..=total).skip(skip).take(take).collect()
    } else {
        (1..=total).rev().skip(skip).take(take).collect()
    }
}

fn error_response(err: &Error) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    tracing::warn!(error = %err, "Rejected pagination request");

    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}
