//! public-annotations-api - HTTP API server for public annotations

mod config;
mod handlers;
mod health;
#[cfg(test)]
mod testutil;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use annotations_core::{logging, AnnotationsRepository};
use annotations_store::{CypherDriver, Neo4jClient};

use config::AppConfig;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation and debugging production incidents.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// SHARED STATE AND ERRORS
// =============================================================================

/// State shared by all handlers for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn AnnotationsRepository>,
    pub cache_control: String,
    /// OpenAPI document loaded at startup; `None` when the file was missing.
    pub api_doc: Option<String>,
    pub system_code: String,
    pub app_name: String,
}

/// Client-visible failures of the annotations endpoint. Bodies follow the
/// established `{"message": …}` contract.
#[derive(Debug)]
pub enum ApiError {
    InvalidQueryParameter,
    ShowPublicationNotBoolean,
    ReadFailure(String),
    NotFound(String),
    NotFoundForFilters(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::InvalidQueryParameter => (
                StatusCode::BAD_REQUEST,
                "invalid query parameter".to_string(),
            ),
            ApiError::ShowPublicationNotBoolean => (
                StatusCode::BAD_REQUEST,
                "showPublication query parameter is not a boolean".to_string(),
            ),
            ApiError::ReadFailure(uuid) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Error getting annotations for content with uuid {}", uuid),
            ),
            ApiError::NotFound(uuid) => (
                StatusCode::NOT_FOUND,
                format!("No annotations found for content with uuid {}.", uuid),
            ),
            ApiError::NotFoundForFilters(uuid) => (
                StatusCode::NOT_FOUND,
                format!(
                    "No annotations found for content with uuid {} for the specified filters.",
                    uuid
                ),
            ),
        };

        let body = Json(serde_json::json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

// =============================================================================
// ROUTER AND STARTUP
// =============================================================================

/// The service route table. Middleware is layered on in `main`; tests run
/// this router bare.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/content/:uuid/annotations", get(handlers::get_annotations))
        .route("/__health", get(health::health))
        .route("/__gtg", get(health::gtg))
        .route("/__build-info", get(health::build_info))
        .route("/__api", get(health::api_doc))
        .with_state(state)
}

fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config);

    info!(
        port = config.port,
        neo_url = %config.neo_url,
        "starting public-annotations-api"
    );

    let client = Neo4jClient::new(config.neo_url.clone(), config.neo_database.clone());
    let repo: Arc<dyn AnnotationsRepository> =
        Arc::new(CypherDriver::new(client, config.public_api_url.clone()));

    let api_doc = match std::fs::read_to_string(&config.api_yml) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(path = %config.api_yml, error = %e, "OpenAPI document not loaded");
            None
        }
    };

    let state = AppState {
        repo,
        cache_control: config.cache_control_header(),
        api_doc,
        system_code: config.app_system_code.clone(),
        app_name: config.app_name.clone(),
    };

    let app = router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<axum::body::Body>| {
                    let span = tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                    );
                    if let Some(id) = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                    {
                        span.record(logging::REQUEST_ID, tracing::field::display(id));
                    }
                    span
                },
            ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(CatchPanicLayer::new());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
