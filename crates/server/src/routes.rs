use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use watchlist_core::error::ApiError;
use watchlist_core::progress::Advance;
use watchlist_core::types::Film;
use watchlist_store::repo::shows;

use crate::error::AppError;
use crate::service;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shows", get(list_shows))
        .route("/shows/watch", post(mark_watched))
        .route("/films", get(list_films))
        .route("/genres", get(list_genres))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    shows::load_shows(&state.store)
        .await
        .map_err(|e| ApiError::Internal(format!("store check failed: {e}")))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Shows
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ShowsQuery {
    genre: Option<String>,
}

/// Without `genre`: the currently-watching rows. With it: never-started shows
/// in that genre.
async fn list_shows(
    State(state): State<AppState>,
    Query(query): Query<ShowsQuery>,
) -> Result<Response, AppError> {
    match query.genre.as_deref().filter(|g| !g.is_empty()) {
        Some(genre) => {
            let found = service::unwatched_by_genre(&state.store, genre).await?;
            Ok(Json(found).into_response())
        }
        None => {
            let rows = service::currently_watching(&state.store).await?;
            Ok(Json(rows).into_response())
        }
    }
}

#[derive(Deserialize)]
struct WatchQuery {
    index: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WatchResponse {
    index: i64,
    completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_series: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_episode: Option<i64>,
}

async fn mark_watched(
    State(state): State<AppState>,
    Query(query): Query<WatchQuery>,
) -> Result<Json<WatchResponse>, AppError> {
    let raw = query
        .index
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest("index query parameter is required".into()))?;
    let index: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("index must be a valid integer".into()))?;

    let outcome = {
        let _guard = state.write_lock.lock().await;
        service::mark_watched(&state.store, index).await?
    };

    let (current_series, current_episode) = match outcome {
        Advance::Next { series, episode } => (Some(series), Some(episode)),
        Advance::Completed | Advance::Recovered { .. } => (None, None),
    };

    Ok(Json(WatchResponse {
        index,
        completed: outcome.is_completed(),
        current_series,
        current_episode,
    }))
}

// ---------------------------------------------------------------------------
// Films & genres
// ---------------------------------------------------------------------------

async fn list_films(State(state): State<AppState>) -> Result<Json<Vec<Film>>, AppError> {
    Ok(Json(service::all_films(&state.store).await?))
}

async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(service::available_genres(&state.store).await?))
}
