//! HTTP front end for the lookup engine.
//!
//! Routes:
//! - `GET /health`
//! - `GET /api/v1/words/:word`
//! - `GET /api/v1/suggest/:prefix?limit=N`
//! - `GET /api/v1/stats`
//!
//! When a static directory is configured, every other path is served from
//! it with `index.html` as the fallback for client-side routing.

pub mod error;
pub mod routes;
pub mod trace_init;

use std::path::Path;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use wordbook_core::suggest::LookupEngine;

use error::ApiError;

/// Shared, immutable request state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LookupEngine>,
}

impl AppState {
    pub fn new(engine: LookupEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/words/:word", get(routes::lookup_word))
        .route("/suggest/:prefix", get(routes::suggest_words))
        .route("/stats", get(routes::stats));

    let mut router = Router::new()
        .route("/health", get(routes::health))
        .nest("/api/v1", api);

    if let Some(dir) = static_dir.filter(|d| d.is_dir()) {
        let serve = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback(move |req: Request| serve_frontend(serve, req));
    }

    router
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

/// Serve a frontend file, answering unknown paths with `index.html`.
///
/// API and health paths never fall through to the frontend.
async fn serve_frontend(serve: ServeDir<ServeFile>, req: Request) -> Response {
    let path = req.uri().path();
    if path.starts_with("/api/") || path == "/health" {
        return ApiError::NotFound.into_response();
    }
    match serve.oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}
