//! Guestbook handlers

use crate::error::{ApiError, ApiResult};
use crate::session::session_user;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use mergelab_service::Message;
use serde::{Deserialize, Serialize};

/// Message list response
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// Read the recent guestbook window. No login needed.
pub async fn list_messages(State(state): State<AppState>) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        messages: state.messages.recent(),
    })
}

/// Post payload
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub text: String,
}

/// Post outcome
#[derive(Debug, Serialize)]
pub struct PostMessageResponse {
    pub status: String,
}

/// Post a message as the logged-in user
pub async fn post_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<PostMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = session_user(&state, &headers).ok_or(ApiError::LoginRequired)?;

    if state.messages.post(&name, &body.text) {
        Ok((
            StatusCode::CREATED,
            Json(PostMessageResponse {
                status: "posted".to_string(),
            }),
        ))
    } else {
        Ok((
            StatusCode::OK,
            Json(PostMessageResponse {
                status: "ignored".to_string(),
            }),
        ))
    }
}
