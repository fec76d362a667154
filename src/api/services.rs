use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

use super::{state::AppState, utils};
use crate::api::error::ApiError;
use crate::collection::{self, DocumentSource, ExtractOptions, SummaryDocument};

const UPLOAD_FIELD: &str = "file";

type Summarized = Result<(SummaryDocument, String), ApiError>;

/// Collection upload endpoint (POST /api/parseCollection)
///
/// Accepts `multipart/form-data` with the collection in a `file` field.
///
/// ## Flow:
/// 1. Read the `file` field, enforcing the configured upload limit
/// 2. Write the bytes to `<uuid>_<original name>` in the upload directory
/// 3. Summarize the temp file; it is removed when the summary is done,
///    whether or not parsing succeeded
/// 4. Return 200 with the indented JSON summary
///
/// Malformed JSON answers 400; an unreadable temp file answers 500.
pub async fn parse_collection(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let result = summarize_multipart(&state, multipart).await;
    respond(&state, result)
}

async fn summarize_multipart(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Summarized {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))?;
    let limit = state.max_upload_bytes();

    let (file_name, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::from_multipart(e, limit))?
            .ok_or_else(|| {
                ApiError::InvalidPayload(format!("missing multipart field '{UPLOAD_FIELD}'"))
            })?;

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = utils::sanitize_file_name(field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::from_multipart(e, limit))?;
        break (file_name, bytes.to_vec());
    };

    utils::validate_body_size(&bytes, limit)?;
    info!(file_name = %file_name, size = bytes.len(), "Received collection upload");

    let upload_dir = state.config.server.upload_dir();
    let options = state.config.extract.clone();
    tokio::task::spawn_blocking(move || {
        summarize_upload(upload_dir, &file_name, &bytes, &options)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("summary task failed: {e}")))?
}

/// In-memory variant (POST /api/collections/summary)
///
/// Takes the collection as an `application/json` request body; nothing is
/// written to disk.
pub async fn summarize_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<Response, ApiError> {
    let result = summarize_body(&state, &headers, body).await;
    respond(&state, result)
}

async fn summarize_body(
    state: &AppState,
    headers: &HeaderMap,
    body: axum::body::Body,
) -> Summarized {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::InvalidPayload("missing Content-Type header".into()))?;
    utils::parse_content_type(content_type)?;

    let bytes = read_body(body, state.max_upload_bytes()).await?;

    let options = state.config.extract.clone();
    tokio::task::spawn_blocking(move || {
        collection::summarize_document(DocumentSource::Bytes(bytes), &options)
            .map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("summary task failed: {e}")))?
}

/// Health check endpoint (GET /health)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut components = BTreeMap::new();
    components.insert("api".to_string(), "healthy".to_string());

    let upload_dir = if state.config.server.upload_dir().is_dir() {
        "healthy"
    } else {
        "unhealthy"
    };
    components.insert("upload_dir".to_string(), upload_dir.to_string());

    let all_healthy = components.values().all(|status| status == "healthy");
    let (status, status_code) = if all_healthy {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    let metrics = state.metrics.snapshot();
    let response = super::models::HealthResponse {
        status: status.to_string(),
        components,
        version: env!("CARGO_PKG_VERSION").to_string(),
        collections_parsed: metrics.collections_parsed,
        collections_rejected: metrics.collections_rejected,
        endpoints_extracted: metrics.endpoints_extracted,
    };

    (status_code, Json(response))
}

/// Blocking half of the upload flow. The temp file lives only for the
/// duration of this call.
fn summarize_upload(
    upload_dir: PathBuf,
    file_name: &str,
    bytes: &[u8],
    options: &ExtractOptions,
) -> Summarized {
    let prefix = format!("{}_", Uuid::new_v4());
    let mut temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(file_name)
        .rand_bytes(0)
        .tempfile_in(&upload_dir)
        .map_err(|e| ApiError::Internal(format!("Failed to create temp file: {e}")))?;

    temp.write_all(bytes)
        .and_then(|_| temp.flush())
        .map_err(|e| ApiError::Internal(format!("Failed to write temp file: {e}")))?;

    let source = DocumentSource::Path(temp.path().to_path_buf());
    let result = collection::summarize_document(source, options).map_err(ApiError::from);

    if let Err(e) = temp.close() {
        warn!(error = %e, "Failed to remove temp upload");
    }

    result
}

/// Single exit for both summary endpoints; every outcome is counted here
fn respond(state: &AppState, result: Summarized) -> Result<Response, ApiError> {
    match result {
        Ok((summary, rendered)) => {
            state.metrics.collection_parsed(summary.endpoints.len());
            info!(
                title = %summary.title,
                endpoints = summary.endpoints.len(),
                "Collection summarized"
            );
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                rendered,
            )
                .into_response())
        }
        Err(e) => {
            state.metrics.collection_rejected();
            warn!(error = %e, "Collection rejected");
            Err(e)
        }
    }
}

/// Reads the request body, failing once `max_size` bytes are exceeded
async fn read_body(body: axum::body::Body, max_size: usize) -> Result<Vec<u8>, ApiError> {
    let collected = Limited::new(body, max_size).collect().await.map_err(|err| {
        if err.is::<LengthLimitError>() {
            ApiError::PayloadTooLarge(max_size)
        } else {
            ApiError::InvalidPayload(err.to_string())
        }
    })?;

    Ok(collected.to_bytes().to_vec())
}
