//! Admin gate handler
//!
//! The payoff endpoint: access rides entirely on the truthiness of the
//! actor's effective `isAdmin` attribute. In an unguarded deployment a
//! polluted shared default flips this gate open for everyone.

use crate::error::ApiResult;
use crate::session::session_user;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use mergelab_core::AttrMap;
use mergelab_service::DEMO_RECORD;
use serde::Serialize;

/// Admin view response
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub status: String,
    pub actor: String,
    pub user: AttrMap,
}

/// Privileged view, gated on the effective `isAdmin` attribute
pub async fn admin(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let actor = session_user(&state, &headers).unwrap_or_else(|| DEMO_RECORD.to_string());

    if !state.profile.is_authorized(&actor, "isAdmin") {
        // Fixed denial, always the same words: the check never explains
        // which tier the attribute came from, or whether it existed at all.
        tracing::debug!(target: "mergelab::http", actor = %actor, "admin access denied");
        return Ok((StatusCode::FORBIDDEN, "Access denied").into_response());
    }

    let user = state.profile.effective_view(&actor)?;
    Ok(Json(AdminResponse {
        status: "admin".to_string(),
        actor,
        user,
    })
    .into_response())
}
