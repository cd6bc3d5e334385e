//! Profile store.
//!
//! Holds the user's profile and persists every update through a `KeyValueStore`.

use std::sync::Arc;
use tracing::{debug, instrument};

use hotel_search_shared::{ProfileData, ProfileUpdate};

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::KeyValueStore;
use crate::utils::{load_json, save_json};

pub struct ProfileStore {
    provider: Arc<dyn KeyValueStore>,
    key: String,
    profile: ProfileData,
}

impl ProfileStore {
    /// Create a store holding the default profile. Call `load` to restore
    /// persisted state.
    pub fn new(provider: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        Self {
            provider,
            key: config.profile_key.clone(),
            profile: ProfileData::default(),
        }
    }

    /// Restore the persisted profile, keeping the default if none was saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&mut self) -> Result<(), StoreError> {
        if let Some(profile) = load_json(self.provider.as_ref(), &self.key).await? {
            self.profile = profile;
            debug!("Profile restored");
        }
        Ok(())
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Merge `update` into the profile and persist the result.
    ///
    /// An empty update is a no-op and does not touch storage.
    #[instrument(skip(self, update))]
    pub async fn update(&mut self, update: ProfileUpdate) -> Result<&ProfileData, StoreError> {
        if update.is_empty() {
            return Ok(&self.profile);
        }
        self.profile.apply(update);
        save_json(self.provider.as_ref(), &self.key, &self.profile).await?;
        Ok(&self.profile)
    }

    /// Replace the profile image.
    pub async fn update_profile_image(
        &mut self,
        image_uri: impl Into<String>,
    ) -> Result<&ProfileData, StoreError> {
        self.update(ProfileUpdate {
            profile_image: Some(image_uri.into()),
            ..Default::default()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::InMemoryStore;

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let provider = Arc::new(InMemoryStore::new());
        let mut store = ProfileStore::new(provider.clone(), &StoreConfig::default());
        store.load().await.unwrap();

        let profile = store
            .update(ProfileUpdate {
                name: Some("Dewi".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(profile.name, "Dewi");
        assert_eq!(profile.email, "antony@example.com");

        let mut reloaded = ProfileStore::new(provider, &StoreConfig::default());
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.profile().name, "Dewi");
    }

    #[tokio::test]
    async fn test_update_profile_image() {
        let provider = Arc::new(InMemoryStore::new());
        let mut store = ProfileStore::new(provider, &StoreConfig::default());

        let profile = store.update_profile_image("file:///avatar.png").await.unwrap();
        assert_eq!(profile.profile_image, "file:///avatar.png");
    }

    #[tokio::test]
    async fn test_empty_update_skips_storage() {
        let provider = Arc::new(InMemoryStore::new());
        let mut store = ProfileStore::new(provider.clone(), &StoreConfig::default());

        store.update(ProfileUpdate::default()).await.unwrap();
        assert!(provider.is_empty().await);
    }
}
