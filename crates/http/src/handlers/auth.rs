//! Registration, login, and logout handlers

use crate::error::{ApiError, ApiResult};
use crate::session::{clear_session_cookie, session_cookie, session_token};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use mergelab_core::AttrMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials payload shared by register and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: String,
    pub username: String,
}

/// Register a new profile with credentials
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let username = body.username.trim().to_string();
    if username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username and password required".to_string(),
        ));
    }
    if state.profile.contains(&username) {
        return Err(ApiError::Conflict(format!(
            "record '{username}' already exists"
        )));
    }
    state.credentials.register(&username, &body.password)?;

    let mut initial = AttrMap::new();
    initial.insert("username".to_string(), Value::String(username.clone()));
    initial.insert(
        "createdAt".to_string(),
        Value::String(chrono::Utc::now().to_rfc3339()),
    );
    state.profile.register(&username, initial)?;

    tracing::info!(target: "mergelab::http", username = %username, "profile registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "registered".to_string(),
            username,
        }),
    ))
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    pub username: String,
}

/// Verify credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let username = body.username.trim();
    if !state.credentials.verify(username, &body.password) {
        return Err(ApiError::InvalidCredentials);
    }
    let token = state.sessions.create(username);
    tracing::info!(target: "mergelab::http", username, "login");
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(LoginResponse {
            status: "logged in".to_string(),
            username: username.to_string(),
        }),
    ))
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub status: String,
}

/// Destroy the current session, if any
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.destroy(&token);
    }
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(LogoutResponse {
            status: "logged out".to_string(),
        }),
    )
}
