//! Profile update and dashboard handlers
//!
//! `POST /update-profile` is the lab's main attack surface. Every update
//! hits the demo record, and additionally the session user's record when a
//! session exists, all under the deployment's merge policy. A `username`
//! string in the payload doubles as a rename request for the session user.

use crate::error::{ApiError, ApiResult};
use crate::session::session_user;
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, Json};
use mergelab_core::AttrMap;
use mergelab_engine::MergePolicy;
use mergelab_service::DEMO_RECORD;
use serde::Serialize;
use serde_json::Value;

/// Update response
#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub status: String,
    pub user: AttrMap,
    #[serde(rename = "sessionUser")]
    pub session_user: Option<String>,
}

/// Apply an update payload under the deployment policy
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let policy = state.policy;

    // The demo record takes every update; shape errors fail here, before
    // any other state changes.
    state
        .profile
        .update_profile(DEMO_RECORD, body.clone(), policy)?;

    let mut session_name = session_user(&state, &headers);
    if let Some(name) = session_name.clone() {
        state.profile.update_profile(&name, body.clone(), policy)?;

        if let Some(Value::String(requested)) = body.get("username") {
            if let Some(new_name) = state.profile.rename(&name, requested)? {
                state.sessions.rename_user(&name, &new_name);
                state.credentials.rename_user(&name, &new_name);
                session_name = Some(new_name);
            }
        }
    }

    let (status, user) = match policy {
        MergePolicy::Unguarded => (
            "profile updated".to_string(),
            state.profile.effective_view(DEMO_RECORD)?,
        ),
        MergePolicy::Guarded => {
            let subject = session_name.as_deref().unwrap_or(DEMO_RECORD);
            (
                "profile updated (sanitized)".to_string(),
                state.profile.effective_view(subject)?,
            )
        }
    };

    Ok(Json(UpdateProfileResponse {
        status,
        user,
        session_user: session_name,
    }))
}

/// Dashboard response
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: String,
    pub profile: AttrMap,
    #[serde(rename = "labUser")]
    pub lab_user: AttrMap,
}

/// The logged-in user's profile next to the demo record
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<DashboardResponse>> {
    let name = session_user(&state, &headers).ok_or(ApiError::LoginRequired)?;
    let profile = state.profile.effective_view(&name)?;
    let lab_user = state.profile.effective_view(DEMO_RECORD)?;
    Ok(Json(DashboardResponse {
        user: name,
        profile,
        lab_user,
    }))
}
