use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use wordbook_core::dict::Dictionary;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub word: String,
    pub meanings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub prefix: String,
    pub suggestions: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_words: usize,
}

/// Raw query string; `limit` is parsed by the handler so a bad value gets
/// the same JSON error shape as every other API error.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub limit: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn lookup_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<LookupResponse>, ApiError> {
    if word.is_empty() {
        return Err(ApiError::BadRequest(
            "Word parameter is required".to_string(),
        ));
    }
    let Some(meanings) = state.engine.lookup(&word) else {
        debug!(%word, "lookup miss");
        return Err(ApiError::WordNotFound(word));
    };
    Ok(Json(LookupResponse {
        meanings: meanings.to_vec(),
        word,
    }))
}

pub async fn suggest_words(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<SuggestResponse>, ApiError> {
    if prefix.is_empty() {
        return Err(ApiError::BadRequest(
            "Prefix parameter is required".to_string(),
        ));
    }
    // An absent limit falls through to the engine's default.
    let limit = match query.limit.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest("Invalid limit parameter".to_string()))?,
    };

    let suggestions: Vec<String> = state
        .engine
        .suggest(&prefix, limit)
        .into_iter()
        .map(String::from)
        .collect();
    Ok(Json(SuggestResponse {
        count: suggestions.len(),
        suggestions,
        prefix,
    }))
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_words: state.engine.count(),
    })
}
