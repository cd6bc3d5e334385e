//! Favorites store.
//!
//! Tracks which hotels the user has marked as favorite, persists the set through a
//! `KeyValueStore`, and publishes every change to subscribers.
//!
//! Decoration (`decorate`, `favorite_hotels`) is a separate, order-preserving map
//! over records. It can be applied before or after the search engine ranks them
//! with the same outcome, since the favorite flag is neither a sort nor a filter key.

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use hotel_search_shared::seed::DEFAULT_FAVORITE_IDS;
use hotel_search_shared::HotelRecord;

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::KeyValueStore;
use crate::types::FavoriteChange;
use crate::utils::{load_json, save_json};

/// Capacity of the change broadcast channel. Slow subscribers lag rather than block.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// The favorites service injected into whatever needs favorite status.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use hotel_search_repository::{FavoritesStore, InMemoryStore, StoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut favorites = FavoritesStore::new(Arc::new(InMemoryStore::new()), &StoreConfig::default());
/// favorites.load().await?;
///
/// let now_favorite = favorites.toggle(2).await?;
/// assert!(now_favorite);
/// # Ok(())
/// # }
/// ```
pub struct FavoritesStore {
    provider: Arc<dyn KeyValueStore>,
    key: String,
    favorite_ids: BTreeSet<u32>,
    changes: broadcast::Sender<FavoriteChange>,
}

impl FavoritesStore {
    /// Create a store holding the default favorites. Call `load` to restore
    /// persisted state.
    pub fn new(provider: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            provider,
            key: config.favorites_key.clone(),
            favorite_ids: DEFAULT_FAVORITE_IDS.into_iter().collect(),
            changes,
        }
    }

    /// Restore the persisted favorite ids.
    ///
    /// When nothing has been persisted yet the default favorites are kept. On a
    /// decode failure the in-memory set is left untouched and the error returned.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&mut self) -> Result<(), StoreError> {
        if let Some(ids) = load_json::<Vec<u32>>(self.provider.as_ref(), &self.key).await? {
            self.favorite_ids = ids.into_iter().collect();
            info!(count = self.favorite_ids.len(), "Favorites restored");
        } else {
            debug!("No persisted favorites, keeping defaults");
        }
        Ok(())
    }

    /// Returns true if the hotel is a favorite.
    pub fn is_favorite(&self, hotel_id: u32) -> bool {
        self.favorite_ids.contains(&hotel_id)
    }

    /// The current favorite ids, ascending.
    pub fn favorite_ids(&self) -> &BTreeSet<u32> {
        &self.favorite_ids
    }

    /// Flip the favorite status of a hotel and persist the new set.
    ///
    /// The in-memory state changes even when persisting fails; the error is still
    /// returned so callers can surface it.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The hotel is now a favorite
    /// * `Ok(false)` - The hotel is no longer a favorite
    /// * `Err(StoreError)` - If persisting failed
    #[instrument(skip(self))]
    pub async fn toggle(&mut self, hotel_id: u32) -> Result<bool, StoreError> {
        let is_favorite = !self.is_favorite(hotel_id);
        self.apply(hotel_id, is_favorite);
        self.persist().await?;
        Ok(is_favorite)
    }

    /// Set the favorite status of a hotel. Does nothing if it already has that status.
    #[instrument(skip(self))]
    pub async fn set_favorite(&mut self, hotel_id: u32, is_favorite: bool) -> Result<(), StoreError> {
        if self.is_favorite(hotel_id) == is_favorite {
            return Ok(());
        }
        self.apply(hotel_id, is_favorite);
        self.persist().await
    }

    /// Copy `records`, setting `is_favorite` on each from the current set.
    pub fn decorate(&self, records: &[HotelRecord]) -> Vec<HotelRecord> {
        records
            .iter()
            .map(|record| HotelRecord {
                is_favorite: self.is_favorite(record.id),
                ..record.clone()
            })
            .collect()
    }

    /// Only the favorite records, decorated, in their original order.
    pub fn favorite_hotels(&self, records: &[HotelRecord]) -> Vec<HotelRecord> {
        records
            .iter()
            .filter(|record| self.is_favorite(record.id))
            .map(|record| HotelRecord {
                is_favorite: true,
                ..record.clone()
            })
            .collect()
    }

    /// Receive every subsequent favorite change.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoriteChange> {
        self.changes.subscribe()
    }

    fn apply(&mut self, hotel_id: u32, is_favorite: bool) {
        if is_favorite {
            self.favorite_ids.insert(hotel_id);
        } else {
            self.favorite_ids.remove(&hotel_id);
        }
        debug!(hotel_id, is_favorite, "Favorite status changed");

        // No subscribers is not an error.
        let _ = self.changes.send(FavoriteChange {
            hotel_id,
            is_favorite,
        });
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let ids: Vec<u32> = self.favorite_ids.iter().copied().collect();
        save_json(self.provider.as_ref(), &self.key, &ids).await
    }
}
