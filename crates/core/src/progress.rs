//! Watch-progress engine.
//!
//! Pure transformations over a show collection. Listing indexes are 1-based
//! and address the full collection, not the filtered "currently watching"
//! view; [`ViewRow::index`] carries that number so callers never have to
//! translate between the two.

use std::collections::HashSet;

use tracing::warn;

use crate::error::ProgressError;
use crate::types::{Progress, Show, ViewRow};

/// What a single "watched one episode" step did to the targeted show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The show is still in progress at this position.
    Next { series: i64, episode: i64 },
    /// Stepped past the last episode of the last series.
    Completed,
    /// The stored series pointer was outside the episode table, so the show
    /// was closed out instead of rejected.
    Recovered { series: i64 },
}

impl Advance {
    pub fn is_completed(&self) -> bool {
        !matches!(self, Self::Next { .. })
    }
}

/// Result of [`advance_episode`]: the whole collection plus what happened to
/// the targeted show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advanced {
    shows: Vec<Show>,
    position: usize,
    outcome: Advance,
}

impl Advanced {
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// The show that was advanced.
    pub fn show(&self) -> &Show {
        &self.shows[self.position]
    }

    pub fn outcome(&self) -> Advance {
        self.outcome
    }

    pub fn completed(&self) -> bool {
        self.outcome.is_completed()
    }
}

/// Shows with both position fields set, in collection order.
pub fn currently_watching(shows: &[Show]) -> Vec<ViewRow> {
    shows
        .iter()
        .enumerate()
        .filter(|(_, show)| show.is_watching())
        .map(|(i, show)| ViewRow::new(i + 1, show))
        .collect()
}

/// Mark one episode of the show at `index` (1-based) as watched.
///
/// Every other show passes through untouched. The caller persists the
/// returned collection.
pub fn advance_episode(mut shows: Vec<Show>, index: i64) -> Result<Advanced, ProgressError> {
    if index <= 0 {
        return Err(ProgressError::InvalidIndex(index));
    }
    let len = shows.len();
    let position = usize::try_from(index - 1)
        .ok()
        .filter(|p| *p < len)
        .ok_or(ProgressError::IndexOutOfRange { index, len })?;

    let show = &mut shows[position];
    let Ok(Progress::InProgress { series, episode }) = show.progress() else {
        return Err(ProgressError::NotCurrentlyWatching {
            index,
            name: show.name.clone(),
        });
    };

    let outcome = step(&show.episodes, series, episode);
    match outcome {
        Advance::Next { series, episode } => {
            show.set_progress(Progress::InProgress { series, episode });
        }
        Advance::Completed => show.set_progress(Progress::Finished),
        Advance::Recovered { series } => {
            warn!(
                show = %show.name,
                series,
                known_series = show.episodes.len(),
                "series pointer outside episode table, marking show finished"
            );
            show.set_progress(Progress::Finished);
        }
    }

    Ok(Advanced {
        shows,
        position,
        outcome,
    })
}

/// Distinct non-empty genres across the collection.
pub fn genres_of(shows: &[Show]) -> HashSet<String> {
    shows
        .iter()
        .map(|show| show.genre.as_str())
        .filter(|genre| !genre.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Never-started shows whose genre equals `genre` exactly.
pub fn unwatched_by_genre<'a>(shows: &'a [Show], genre: &str) -> Vec<&'a Show> {
    shows
        .iter()
        .filter(|show| show.genre == genre && show.is_unwatched())
        .collect()
}

fn step(episodes: &[u32], series: i64, episode: i64) -> Advance {
    let Some(in_series) = series_length(episodes, series) else {
        return Advance::Recovered { series };
    };

    let episode = episode.saturating_add(1);
    if episode <= i64::from(in_series) {
        return Advance::Next { series, episode };
    }

    let series = series + 1;
    if series > episodes.len() as i64 {
        Advance::Completed
    } else {
        Advance::Next { series, episode: 1 }
    }
}

fn series_length(episodes: &[u32], series: i64) -> Option<u32> {
    let i = usize::try_from(series.checked_sub(1)?).ok()?;
    episodes.get(i).copied()
}
