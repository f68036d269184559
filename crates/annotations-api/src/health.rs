//! Operational endpoints: `__health`, `__gtg`, `__build-info`, `__api`.

use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::config::APP_DESCRIPTION;
use crate::AppState;

/// Budget for the connectivity probe; a hung store must not hang `__health`.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

const CHECK_NAME: &str = "Check connectivity to Neo4j";
const BUSINESS_IMPACT: &str = "Unable to respond to public annotations requests";
const TECHNICAL_SUMMARY: &str =
    "Cannot connect to the Neo4j instance holding the annotations graph";
const PANIC_GUIDE: &str = "https://runbooks.ftops.tech/public-annotations-api";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    schema_version: u32,
    system_code: String,
    name: String,
    description: &'static str,
    checks: Vec<CheckResult>,
    ok: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResult {
    name: &'static str,
    ok: bool,
    severity: u8,
    business_impact: &'static str,
    technical_summary: &'static str,
    panic_guide: &'static str,
    check_output: String,
    last_updated: String,
}

async fn connectivity_probe(state: &AppState) -> Result<(), String> {
    match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, state.repo.check_connectivity()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!(
            "connectivity check timed out after {}s",
            HEALTH_CHECK_TIMEOUT.as_secs()
        )),
    }
}

/// `GET /__health`. Always `200`; the `ok` fields carry the verdict.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = connectivity_probe(&state).await;
    let ok = outcome.is_ok();
    let check_output = match outcome {
        Ok(()) => "Connectivity to Neo4j is ok".to_string(),
        Err(e) => {
            error!(error = %e, "health check failed");
            e
        }
    };

    Json(HealthStatus {
        schema_version: 1,
        system_code: state.system_code.clone(),
        name: state.app_name.clone(),
        description: APP_DESCRIPTION,
        checks: vec![CheckResult {
            name: CHECK_NAME,
            ok,
            severity: 1,
            business_impact: BUSINESS_IMPACT,
            technical_summary: TECHNICAL_SUMMARY,
            panic_guide: PANIC_GUIDE,
            check_output,
            last_updated: Utc::now().to_rfc3339(),
        }],
        ok,
    })
}

/// `GET /__gtg`. Plain-text `OK` when the store answers, `503` otherwise.
pub async fn gtg(State(state): State<AppState>) -> Response {
    let cache_headers = [(header::CACHE_CONTROL, "no-cache")];
    match connectivity_probe(&state).await {
        Ok(()) => (StatusCode::OK, cache_headers, "OK".to_string()).into_response(),
        Err(e) => {
            error!(error = %e, "good-to-go check failed");
            (StatusCode::SERVICE_UNAVAILABLE, cache_headers, e).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildInfo {
    version: &'static str,
    repository: &'static str,
    revision: &'static str,
    builder: &'static str,
    date_time: &'static str,
}

/// `GET /__build-info`. Revision and build date come from the build
/// environment when the release pipeline provides them.
pub async fn build_info() -> impl IntoResponse {
    Json(BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        repository: env!("CARGO_PKG_REPOSITORY"),
        revision: option_env!("GIT_REVISION").unwrap_or(""),
        builder: option_env!("BUILDER").unwrap_or(""),
        date_time: option_env!("BUILD_DATE").unwrap_or(""),
    })
}

/// `GET /__api`. Serves the OpenAPI document loaded at startup.
pub async fn api_doc(State(state): State<AppState>) -> Response {
    match &state.api_doc {
        Some(doc) => ([(header::CONTENT_TYPE, "application/yaml")], doc.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "API document not found"})),
        )
            .into_response(),
    }
}
