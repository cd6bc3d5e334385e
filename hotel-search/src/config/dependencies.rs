//! Dependency initialization and wiring for a search session.

use std::sync::Arc;
use tracing::{info, warn};

use hotel_search_repository::{
    FavoritesStore, InMemoryStore, JsonFileStore, KeyValueStore, ProfileStore, StoreConfig,
    StoreError, TripStore,
};

use super::AppConfig;
use crate::catalog::Catalog;
use crate::engine::SearchFilterEngine;
use crate::AppError;

/// Container for all initialized session dependencies.
pub struct Dependencies {
    pub catalog: Catalog,
    pub engine: SearchFilterEngine,
    pub favorites: FavoritesStore,
    pub profile: ProfileStore,
    pub trips: TripStore,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See `AppConfig::from_env` for the variables read.
    pub async fn new() -> Result<Self, AppError> {
        Self::from_config(AppConfig::from_env()).await
    }

    /// Initialize all dependencies from an explicit configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Catalog loaded, stores restored, engine primed with the initial filters
    /// * `Err(AppError)` - If the catalog cannot be loaded or persisted state cannot be read
    pub async fn from_config(config: AppConfig) -> Result<Self, AppError> {
        info!(
            hotels_path = ?config.hotels_path,
            storage_dir = ?config.storage_dir,
            search_fields = ?config.search_fields,
            "Initializing dependencies"
        );

        let catalog = match &config.hotels_path {
            Some(path) => Catalog::from_json_file(path).await?,
            None => Catalog::seed(),
        };

        let provider: Arc<dyn KeyValueStore> = match &config.storage_dir {
            Some(dir) => Arc::new(JsonFileStore::new(dir)),
            None => Arc::new(InMemoryStore::new()),
        };

        let mut store_config = StoreConfig::default();
        if config.max_bookings.is_some() {
            store_config = store_config.with_max_bookings(config.max_bookings);
        }

        Self::with_provider(catalog, provider, &store_config, config).await
    }

    /// Wire a session over an already-chosen catalog and storage provider.
    ///
    /// A persisted value that no longer decodes is logged and skipped, leaving that
    /// store at its defaults. Backend read failures are still returned.
    pub async fn with_provider(
        catalog: Catalog,
        provider: Arc<dyn KeyValueStore>,
        store_config: &StoreConfig,
        config: AppConfig,
    ) -> Result<Self, AppError> {
        let mut favorites = FavoritesStore::new(provider.clone(), store_config);
        skip_undecodable(favorites.load().await, "favorites")?;

        let mut profile = ProfileStore::new(provider.clone(), store_config);
        skip_undecodable(profile.load().await, "profile")?;

        let mut trips = TripStore::new(provider, store_config);
        skip_undecodable(trips.load().await, "trips")?;

        let mut engine = SearchFilterEngine::with_fields(catalog.shared(), config.search_fields);
        if config.initial_filters.is_active() {
            engine.set_filters(config.initial_filters);
        }

        info!(
            hotels = catalog.len(),
            favorites = favorites.favorite_ids().len(),
            trips = trips.bookings().len(),
            "Dependencies initialized"
        );

        Ok(Self {
            catalog,
            engine,
            favorites,
            profile,
            trips,
        })
    }
}

fn skip_undecodable(result: Result<(), StoreError>, store: &str) -> Result<(), StoreError> {
    match result {
        Err(StoreError::SerializationError(message)) => {
            warn!(store, error = %message, "Persisted state unreadable, keeping defaults");
            Ok(())
        }
        other => other,
    }
}
