use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use gedparity_bridge::OutputTarget;
use gedparity_core::canonical::canonicalize;
use gedparity_store::text::decode_dropping_invalid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Path to the GWB database base on the server.
    pub input_dir: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Canonicalized converter output.
    pub stdout: String,
    pub digest: String,
}

pub async fn gwb2ged(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Json<ExportResponse>> {
    if query.input_dir.is_empty() {
        return Err(ApiError::BadRequest("input_dir is required".to_string()));
    }
    let converter = state
        .converter
        .as_ref()
        .ok_or(ApiError::ConverterUnavailable)?;

    let input = PathBuf::from(&query.input_dir);
    let converter = converter.clone();
    // Child process wait is blocking; keep it off the async workers.
    let out = tokio::task::spawn_blocking(move || {
        converter.gwb2ged(&input, &OutputTarget::Stdout)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    let canonical = canonicalize(&decode_dropping_invalid(&out.stdout));
    let digest = gedparity_core::digest::hash_bytes_hex(canonical.as_bytes());
    Ok(Json(ExportResponse {
        stdout: canonical,
        digest,
    }))
}
