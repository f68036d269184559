//! HTTP handler for the annotations read endpoint.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use annotations_core::lifecycles::lifecycle_tag;
use annotations_pipeline::ResolutionRequest;

use crate::{ApiError, AppState};

/// Request header carrying a Neo4j causal-consistency token.
pub const NEO4J_BOOKMARK_HEADER: &str = "Neo4j-Bookmark";

/// `GET /content/:uuid/annotations`
///
/// Query parameters: repeated `lifecycle` (validated public names),
/// repeated `publication` (opaque), and `showPublication` (boolean).
/// Lifecycle validation happens before the store read; `showPublication`
/// is parsed after it, so an unreadable or missing content UUID wins over
/// a malformed boolean.
pub async fn get_annotations(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let mut lifecycles: Vec<String> = Vec::new();
    let mut publications: Vec<String> = Vec::new();
    let mut show_publication_raw: Option<String> = None;
    for (key, value) in params {
        match key.as_str() {
            "lifecycle" => lifecycles.push(value),
            "publication" => publications.push(value),
            "showPublication" => {
                if show_publication_raw.is_none() {
                    show_publication_raw = Some(value);
                }
            }
            _ => {}
        }
    }

    for name in &lifecycles {
        if lifecycle_tag(name).is_none() {
            error!(content_uuid = %uuid, lifecycle = %name, "invalid lifecycle value");
            return Err(ApiError::InvalidQueryParameter);
        }
    }

    let bookmark = headers
        .get(NEO4J_BOOKMARK_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    let result = match state.repo.read(&uuid, bookmark).await {
        Ok(result) => result,
        Err(e) => {
            error!(content_uuid = %uuid, error = %e, "failed getting annotations for content");
            return Err(ApiError::ReadFailure(uuid));
        }
    };
    if !result.found {
        return Err(ApiError::NotFound(uuid));
    }

    let show_publication = match show_publication_raw.as_deref() {
        None | Some("") => false,
        Some(raw) => parse_bool(raw).ok_or(ApiError::ShowPublicationNotBoolean)?,
    };

    let annotations = ResolutionRequest::new()
        .with_lifecycles(lifecycles)
        .with_publications(publications, show_publication)
        .resolve(result.annotations);
    if annotations.is_empty() {
        return Err(ApiError::NotFoundForFilters(uuid));
    }

    debug!(content_uuid = %uuid, output_count = annotations.len(), "annotations resolved");
    Ok((
        [(header::CACHE_CONTROL, state.cache_control.clone())],
        Json(annotations),
    ))
}

/// Boolean query-parameter values: `1`, `t`, `T`, `TRUE`, `true`, `True`
/// are true; `0`, `f`, `F`, `FALSE`, `false`, `False` are false.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
