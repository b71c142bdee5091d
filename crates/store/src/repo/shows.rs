use watchlist_core::types::Show;

use crate::{JsonStore, StoreError, read_json, write_json_atomic};

/// Load the full show collection in stored order.
pub async fn load_shows(store: &JsonStore) -> Result<Vec<Show>, StoreError> {
    read_json(store.shows_path()).await
}

/// Replace the stored show collection.
pub async fn save_shows(store: &JsonStore, shows: &[Show]) -> Result<(), StoreError> {
    write_json_atomic(store.shows_path(), shows).await
}
