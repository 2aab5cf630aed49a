//! Upload handler
//!
//! Raw request bytes go to the file store under a random name; the caller's
//! filename claim travels only in metadata. The stored file is served back
//! under `/uploads/<stored>`.

use crate::error::{ApiError, ApiResult};
use crate::session::session_user;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Upload query parameters
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Client's claimed filename. Informational only.
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "upload.bin".to_string()
}

/// Upload outcome
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Store the raw request body as a file
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    session_user(&state, &headers).ok_or(ApiError::LoginRequired)?;

    if body.is_empty() {
        return Err(ApiError::BadRequest("no file provided".to_string()));
    }

    let stored = state.files.store(&params.filename, &body)?;
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            status: "uploaded".to_string(),
            original_name: stored.original_name,
            file_path: format!("/uploads/{}", stored.stored_name),
        }),
    ))
}
