//! Load → engine → save sequences shared by the HTTP API and the prompt.

use tracing::info;
use watchlist_core::error::ProgressError;
use watchlist_core::progress::{self, Advance};
use watchlist_core::types::{Film, Show, ViewRow};
use watchlist_store::repo::{films, shows};
use watchlist_store::{JsonStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub async fn currently_watching(store: &JsonStore) -> Result<Vec<ViewRow>, ServiceError> {
    let all = shows::load_shows(store).await?;
    Ok(progress::currently_watching(&all))
}

/// Advance the show at listing `index` by one episode and persist the result.
///
/// Nothing is written when the engine rejects the index.
pub async fn mark_watched(store: &JsonStore, index: i64) -> Result<Advance, ServiceError> {
    let all = shows::load_shows(store).await?;
    let advanced = progress::advance_episode(all, index)?;
    shows::save_shows(store, advanced.shows()).await?;

    info!(
        index,
        show = %advanced.show().name,
        outcome = ?advanced.outcome(),
        "episode marked as watched"
    );
    Ok(advanced.outcome())
}

pub async fn all_films(store: &JsonStore) -> Result<Vec<Film>, ServiceError> {
    Ok(films::load_films(store).await?)
}

/// Distinct genres, sorted for display.
pub async fn available_genres(store: &JsonStore) -> Result<Vec<String>, ServiceError> {
    let all = shows::load_shows(store).await?;
    let mut genres: Vec<String> = progress::genres_of(&all).into_iter().collect();
    genres.sort();
    Ok(genres)
}

pub async fn unwatched_by_genre(
    store: &JsonStore,
    genre: &str,
) -> Result<Vec<Show>, ServiceError> {
    let all = shows::load_shows(store).await?;
    Ok(progress::unwatched_by_genre(&all, genre)
        .into_iter()
        .cloned()
        .collect())
}
