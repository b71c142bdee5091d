use tempfile::TempDir;
use watchlist_core::types::{Progress, Show};
use watchlist_store::repo::{films, shows};
use watchlist_store::{JsonStore, StoreError};

const SHOWS: &str = r#"[
  {"name": "Severance", "genre": "Drama", "episodes": [9, 10], "provider": "Apple TV+", "currentSeries": 1, "currentEpisode": 4},
  {"name": "The Bear", "genre": "Comedy", "episodes": [8], "provider": "Disney+"}
]"#;

const FILMS: &str = r#"[
  {"name": "Inception", "genre": "Sci-Fi", "provider": "Netflix"},
  {"name": "The Matrix", "genre": "Sci-Fi", "provider": "Prime Video"}
]"#;

fn seeded() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("shows.json"), SHOWS).unwrap();
    std::fs::write(dir.path().join("films.json"), FILMS).unwrap();
    let store = JsonStore::in_dir(dir.path());
    (dir, store)
}

#[tokio::test]
async fn loads_shows_in_order() {
    let (_dir, store) = seeded();
    let loaded = shows::load_shows(&store).await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "Severance");
    assert_eq!(
        loaded[0].progress(),
        Ok(Progress::InProgress {
            series: 1,
            episode: 4,
        })
    );
    assert_eq!(loaded[1].progress(), Ok(Progress::NotStarted));
}

#[tokio::test]
async fn loads_films() {
    let (_dir, store) = seeded();
    let loaded = films::load_films(&store).await.unwrap();
    let names: Vec<&str> = loaded.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Inception", "The Matrix"]);
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::in_dir(dir.path());
    let err = shows::load_shows(&store).await.unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
    let err = films::load_films(&store).await.unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
}

#[tokio::test]
async fn unparsable_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("shows.json"), "{not json").unwrap();
    let store = JsonStore::in_dir(dir.path());
    let err = shows::load_shows(&store).await.unwrap_err();
    match err {
        StoreError::Read { path, reason } => {
            assert!(path.ends_with("shows.json"));
            assert!(reason.starts_with("invalid json"));
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[tokio::test]
async fn save_replaces_document_and_leaves_no_temp_files() {
    let (dir, store) = seeded();
    let mut loaded = shows::load_shows(&store).await.unwrap();
    loaded[1].set_progress(Progress::InProgress {
        series: 1,
        episode: 1,
    });
    loaded.push(Show::new("Slow Horses", "Drama", "Apple TV+", vec![6, 6]));

    shows::save_shows(&store, &loaded).await.unwrap();

    let reloaded = shows::load_shows(&store).await.unwrap();
    assert_eq!(reloaded, loaded);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    let raw = std::fs::read_to_string(store.shows_path()).unwrap();
    assert!(raw.contains("\n  {"), "expected two-space indentation");
}

#[tokio::test]
async fn save_into_missing_directory_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::in_dir(dir.path().join("does-not-exist"));
    let err = shows::save_shows(&store, &[]).await.unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}
