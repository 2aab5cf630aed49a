//! Search handler
//!
//! Demonstrates client-controlled configuration: the query string is merged
//! over a fresh set of server defaults with the same unguarded engine the
//! profile path uses. Query values arrive as flat strings, so `?page=3`
//! overwrites the numeric default with the string `"3"`, faithfully
//! reproducing what loosely typed request parsing does.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use mergelab_core::AttrMap;
use mergelab_engine::MergePolicy;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub effective: AttrMap,
}

fn search_defaults() -> AttrMap {
    let mut filters = AttrMap::new();
    filters.insert("q".to_string(), Value::String(String::new()));
    filters.insert("tags".to_string(), Value::Array(Vec::new()));

    let mut defaults = AttrMap::new();
    defaults.insert("page".to_string(), Value::from(1));
    defaults.insert("pageSize".to_string(), Value::from(10));
    defaults.insert("filters".to_string(), Value::Object(filters));
    defaults
}

/// Merge the query string over fresh server defaults
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> ApiResult<Json<SearchResponse>> {
    let mut effective = search_defaults();
    let query: AttrMap = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    state
        .engine
        .apply(MergePolicy::Unguarded, &mut effective, &state.store, query);

    Ok(Json(SearchResponse { effective }))
}
