use serde::{Deserialize, Deserializer, Serialize};

/// Where a show's watch position stands.
///
/// The persisted record stores this as two optional integers plus a
/// `completed` marker; [`Show::progress`] is the only way to read it back
/// and [`Show::set_progress`] the only way to write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NotStarted,
    /// 1-based series and episode currently being watched.
    InProgress {
        series: i64,
        episode: i64,
    },
    Finished,
}

/// A stored record with only one of `currentSeries` / `currentEpisode` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("partial watch position (series: {series:?}, episode: {episode:?})")]
pub struct MalformedProgress {
    pub series: Option<i64>,
    pub episode: Option<i64>,
}

/// A tracked TV show as stored in `shows.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub name: String,
    #[serde(default)]
    pub genre: String,
    /// Episode count per series: `episodes[i]` is the length of series `i + 1`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub episodes: Vec<u32>,
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_series: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_episode: Option<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
}

impl Show {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        provider: impl Into<String>,
        episodes: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            episodes,
            provider: provider.into(),
            current_series: None,
            current_episode: None,
            completed: false,
        }
    }

    /// Builder-style shortcut for a show that is in progress.
    #[cfg(test)]
    pub fn watching(mut self, series: i64, episode: i64) -> Self {
        self.set_progress(Progress::InProgress { series, episode });
        self
    }

    /// Classify the stored position fields.
    pub fn progress(&self) -> Result<Progress, MalformedProgress> {
        match (self.current_series, self.current_episode) {
            (Some(series), Some(episode)) => Ok(Progress::InProgress { series, episode }),
            (None, None) if self.completed => Ok(Progress::Finished),
            (None, None) => Ok(Progress::NotStarted),
            (series, episode) => Err(MalformedProgress { series, episode }),
        }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        match progress {
            Progress::NotStarted => {
                self.current_series = None;
                self.current_episode = None;
                self.completed = false;
            }
            Progress::InProgress { series, episode } => {
                self.current_series = Some(series);
                self.current_episode = Some(episode);
                self.completed = false;
            }
            Progress::Finished => {
                self.current_series = None;
                self.current_episode = None;
                self.completed = true;
            }
        }
    }

    /// Both position fields are present.
    pub fn is_watching(&self) -> bool {
        self.current_series.is_some() && self.current_episode.is_some()
    }

    /// Never started: no position fields at all and not finished.
    pub fn is_unwatched(&self) -> bool {
        self.current_series.is_none() && self.current_episode.is_none() && !self.completed
    }
}

/// A film. Films carry no progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub provider: String,
}

/// One line of the "currently watching" view.
///
/// `index` is the show's 1-based position in the full collection, which is
/// the listing index accepted by
/// [`advance_episode`](crate::progress::advance_episode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRow {
    pub index: usize,
    pub name: String,
    pub genre: String,
    pub provider: String,
    pub series: String,
    pub episode: String,
}

impl ViewRow {
    pub fn new(index: usize, show: &Show) -> Self {
        Self {
            index,
            name: show.name.clone(),
            genre: show.genre.clone(),
            provider: show.provider.clone(),
            series: display_position(show.current_series),
            episode: display_position(show.current_episode),
        }
    }
}

/// Render an optional position value, `"-"` when absent.
pub fn display_position(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

// Older documents wrote `"episodes": null` for shows with no series yet.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u32>>::deserialize(deserializer)?.unwrap_or_default())
}
