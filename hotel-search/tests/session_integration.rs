//! Integration tests for a search session.
//!
//! These tests wire the real engine, catalog and stores through `Dependencies`,
//! with a mock `KeyValueStore` standing in for persisted state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hotel_search::booking::{confirm, parse_nights};
use hotel_search::catalog::Catalog;
use hotel_search::engine::SearchField;
use hotel_search::{AppConfig, AppError, Dependencies, SearchFilterEngine, SearchMode};
use hotel_search_repository::{KeyValueStore, StoreConfig, StoreError};
use hotel_search_shared::{seed, BookingStatus, FilterSpec, HotelRecord, PriceRange};

// Mock store for testing
struct MockStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockStore {
    fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            fail_reads: false,
            fail_writes: false,
        }
    }

    fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    fn with_read_error() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    fn with_write_error() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::io("Mock read error"));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::io("Mock write error"));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

fn names(results: &[HotelRecord]) -> Vec<&str> {
    results.iter().map(|h| h.name.as_str()).collect()
}

async fn session(provider: Arc<MockStore>) -> Dependencies {
    Dependencies::with_provider(
        Catalog::seed(),
        provider,
        &StoreConfig::default(),
        AppConfig::default(),
    )
    .await
    .unwrap()
}

#[test]
fn test_query_villa_matches_keraton_only() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    engine.set_query("villa");

    assert_eq!(names(engine.results()), vec!["Keraton Villa"]);
    assert!(engine.is_searching());
    assert!(!engine.has_active_filters());
}

#[test]
fn test_category_query_orders_by_price() {
    let mut dataset = seed::hotels();
    dataset.push(HotelRecord::new(
        4,
        "Merapi Lodge",
        &["Mountain"],
        "Sleman, DIY",
        4.9,
        80.0,
    ));

    let mut engine = SearchFilterEngine::new(dataset);
    engine.set_query("popular");

    // Equal ratings, so cheaper effective price first; the Mountain lodge is left out.
    assert_eq!(
        names(engine.results()),
        vec!["The Phoenix Hotel", "Aston White Coral", "Keraton Villa"]
    );
}

#[test]
fn test_neutral_filters_and_empty_query_stay_idle() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    engine.set_query("villa");
    assert!(!engine.results().is_empty());

    engine.set_filters(FilterSpec::neutral());
    engine.set_query("");

    assert!(engine.results().is_empty());
    assert!(!engine.is_searching());
    assert!(!engine.shows_empty_state());
    assert_eq!(engine.mode(), SearchMode::Idle);
}

#[test]
fn test_price_filter_only() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    engine.set_filters(FilterSpec::neutral().with_price_range(PriceRange::new(0.0, 130.0)));

    assert_eq!(engine.mode(), SearchMode::FilterOnly);
    assert!(engine.has_active_filters());
    assert!(engine.is_searching());
    assert_eq!(
        names(engine.results()),
        vec!["The Phoenix Hotel", "Aston White Coral"]
    );
}

#[test]
fn test_exact_match_ranks_first() {
    let mut dataset = seed::hotels();
    dataset.push(HotelRecord::new(
        4,
        "Sea Forest",
        &["Beach"],
        "Bantul, DIY",
        4.1,
        90.0,
    ));
    dataset.push(HotelRecord::new(
        5,
        "Sea Forest Resort",
        &["Luxury"],
        "Bantul, DIY",
        4.9,
        180.0,
    ));

    let mut engine = SearchFilterEngine::new(dataset);
    engine.set_query("sea forest");

    // Exact name match beats a higher-rated partial match.
    assert_eq!(
        names(engine.results()),
        vec!["Sea Forest", "Sea Forest Resort"]
    );
}

#[test]
fn test_filters_are_conjunctive() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    engine.set_filters(
        FilterSpec::neutral()
            .with_category("Modern")
            .with_price_range(PriceRange::new(0.0, 150.0))
            .with_location("Sleman, DIY")
            .with_min_rating(4.5),
    );
    assert_eq!(names(engine.results()), vec!["The Phoenix Hotel"]);

    engine.set_filters(FilterSpec::neutral().with_category("Beach").with_location("Bantul, DIY"));
    assert!(engine.results().is_empty());
    assert!(engine.shows_empty_state());
}

#[test]
fn test_filter_only_orders_by_rating_then_price() {
    let dataset = vec![
        HotelRecord::new(1, "Cheap Good", &["Budget"], "Sleman, DIY", 4.2, 60.0),
        HotelRecord::new(2, "Top Rated", &["Budget"], "Sleman, DIY", 4.9, 150.0),
        HotelRecord::new(3, "Cheaper Good", &["Budget"], "Sleman, DIY", 4.2, 40.0),
    ];

    let mut engine = SearchFilterEngine::new(dataset);
    engine.set_filters(FilterSpec::neutral().with_category("Budget"));

    assert_eq!(
        names(engine.results()),
        vec!["Top Rated", "Cheaper Good", "Cheap Good"]
    );
}

#[test]
fn test_clear_all_returns_to_initial_state() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    engine.set_query("popular");
    engine.set_filters(FilterSpec::neutral().with_min_rating(4.0));
    assert!(!engine.results().is_empty());

    engine.clear_all();
    assert!(engine.results().is_empty());
    assert_eq!(engine.query(), "");
    assert_eq!(engine.filters(), &FilterSpec::neutral());
    assert!(!engine.is_searching());
    assert!(!engine.shows_empty_state());
}

#[test]
fn test_repeated_inputs_are_idempotent() {
    let mut engine = SearchFilterEngine::new(seed::hotels());
    let spec = FilterSpec::neutral().with_category("Popular");

    engine.set_query("sleman");
    engine.set_filters(spec.clone());
    let first = engine.results().to_vec();

    engine.set_filters(spec);
    engine.set_query("sleman");
    assert_eq!(engine.results(), first.as_slice());
}

#[test]
fn test_ranking_passes_favorite_flag_through() {
    let mut dataset = seed::hotels();
    dataset[1].is_favorite = true;

    let mut engine = SearchFilterEngine::new(dataset);
    engine.set_query("popular");

    let flags: Vec<(u32, bool)> = engine
        .results()
        .iter()
        .map(|h| (h.id, h.is_favorite))
        .collect();
    assert_eq!(flags, vec![(1, false), (2, true), (3, false)]);
}

#[tokio::test]
async fn test_session_restores_persisted_favorites() {
    let provider = Arc::new(MockStore::with_value("favorites", "[2]"));
    let mut deps = session(provider).await;

    deps.engine.set_query("popular");
    let decorated = deps.favorites.decorate(deps.engine.results());
    let favorites: Vec<u32> = decorated
        .iter()
        .filter(|h| h.is_favorite)
        .map(|h| h.id)
        .collect();
    assert_eq!(favorites, vec![2]);
}

#[tokio::test]
async fn test_session_applies_initial_filters() {
    let config = AppConfig {
        initial_filters: FilterSpec::neutral().with_category("Beach"),
        search_fields: vec![SearchField::Name],
        ..AppConfig::default()
    };

    let deps = Dependencies::with_provider(
        Catalog::seed(),
        Arc::new(MockStore::new()),
        &StoreConfig::default(),
        config,
    )
    .await
    .unwrap();

    assert_eq!(deps.engine.mode(), SearchMode::FilterOnly);
    assert_eq!(deps.engine.fields(), &[SearchField::Name]);
    assert_eq!(names(deps.engine.results()), vec!["Aston White Coral"]);
}

#[tokio::test]
async fn test_session_keeps_defaults_when_favorites_corrupt() {
    let provider = Arc::new(MockStore::with_value("favorites", "{"));
    let deps = session(provider).await;

    let ids: Vec<u32> = deps.favorites.favorite_ids().iter().copied().collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(deps.trips.bookings().is_empty());
}

#[tokio::test]
async fn test_session_starts_over_corrupt_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), "{").unwrap();
    std::fs::write(dir.path().join("userBookings.json"), "not json").unwrap();

    let config = AppConfig {
        storage_dir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };
    let mut deps = Dependencies::from_config(config).await.unwrap();

    assert!(deps.favorites.is_favorite(1));
    assert!(deps.trips.bookings().is_empty());

    // The next write replaces the corrupt value.
    deps.favorites.toggle(2).await.unwrap();
    let raw = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    assert_eq!(raw, "[1,2,3]");
}

#[tokio::test]
async fn test_session_fails_when_state_unreadable() {
    let result = Dependencies::with_provider(
        Catalog::seed(),
        Arc::new(MockStore::with_read_error()),
        &StoreConfig::default(),
        AppConfig::default(),
    )
    .await;

    assert!(matches!(result, Err(AppError::StoreError(StoreError::IoError(_)))));
}

#[tokio::test]
async fn test_toggle_keeps_state_when_write_fails() {
    let mut deps = session(Arc::new(MockStore::with_write_error())).await;

    let result = deps.favorites.toggle(2).await;
    assert!(result.is_err());
    assert!(deps.favorites.is_favorite(2));
}

#[tokio::test]
async fn test_booking_flow_records_trip() {
    let provider = Arc::new(MockStore::new());
    let mut deps = session(provider.clone()).await;

    deps.engine.set_query("villa");
    let villa = deps.engine.results()[0].clone();

    let nights = parse_nights("3 nights").unwrap();
    let booking = confirm(&villa, nights).unwrap();
    assert_eq!(booking.total_price, 600.0);

    let id = booking.id;
    deps.trips.add(booking).await.unwrap();
    assert_eq!(deps.trips.bookings().len(), 1);
    assert!(provider.value("userBookings").is_some());

    deps.trips.cancel(id).await.unwrap();
    assert_eq!(deps.trips.get(id).unwrap().status, BookingStatus::Cancelled);

    let again = deps.trips.cancel(id).await;
    assert!(matches!(again, Err(StoreError::BookingNotCancellable { .. })));
}
