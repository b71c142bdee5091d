use watchlist_core::types::Film;

use crate::{JsonStore, StoreError, read_json};

/// Films are read-only; there is no save path.
pub async fn load_films(store: &JsonStore) -> Result<Vec<Film>, StoreError> {
    read_json(store.films_path()).await
}
