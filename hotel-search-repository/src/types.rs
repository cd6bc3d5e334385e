//! Event types published by the stores.

use serde::{Deserialize, Serialize};

/// Published by `FavoritesStore` whenever a hotel's favorite status changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteChange {
    pub hotel_id: u32,
    pub is_favorite: bool,
}
