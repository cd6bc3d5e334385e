//! Configuration and dependency wiring.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::path::PathBuf;
use tracing::warn;

use hotel_search_shared::FilterSpec;

use crate::engine::{SearchField, DEFAULT_SEARCH_FIELDS};

/// Application configuration, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON dataset to load. `None` uses the built-in seed catalog.
    pub hotels_path: Option<PathBuf>,
    /// Directory for persisted state. `None` keeps state in memory.
    pub storage_dir: Option<PathBuf>,
    /// Record fields the query is matched against.
    pub search_fields: Vec<SearchField>,
    /// Trip history cap. `None` keeps the store's default.
    pub max_bookings: Option<usize>,
    /// Filters applied at session start.
    pub initial_filters: FilterSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hotels_path: None,
            storage_dir: None,
            search_fields: DEFAULT_SEARCH_FIELDS.to_vec(),
            max_bookings: None,
            initial_filters: FilterSpec::neutral(),
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HOTELS_PATH`: JSON array of hotel records (default: built-in seed)
    /// - `STORAGE_DIR`: directory for persisted favorites, profile and trips (default: in-memory)
    /// - `SEARCH_FIELDS`: comma-separated field names (default: name,location,category)
    /// - `MAX_BOOKINGS`: trip history cap (default: 100)
    /// - `SEARCH_FILTERS`: JSON filter spec applied at startup (default: neutral)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`. Invalid values fall back to defaults
    /// with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let search_fields = non_empty("SEARCH_FIELDS")
            .map(|raw| parse_search_fields(&raw))
            .filter(|fields| !fields.is_empty())
            .unwrap_or(defaults.search_fields);

        let max_bookings = non_empty("MAX_BOOKINGS").and_then(|raw| match raw.trim().parse() {
            Ok(max) => Some(max),
            Err(_) => {
                warn!(value = %raw, "Invalid MAX_BOOKINGS, using default");
                None
            }
        });

        let initial_filters = non_empty("SEARCH_FILTERS")
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(spec) => Some(spec),
                Err(e) => {
                    warn!(error = %e, "Invalid SEARCH_FILTERS, using neutral filters");
                    None
                }
            })
            .unwrap_or(defaults.initial_filters);

        Self {
            hotels_path: non_empty("HOTELS_PATH").map(PathBuf::from),
            storage_dir: non_empty("STORAGE_DIR").map(PathBuf::from),
            search_fields,
            max_bookings,
            initial_filters,
        }
    }
}

/// Parse a comma-separated field list, skipping unknown names and duplicates.
fn parse_search_fields(raw: &str) -> Vec<SearchField> {
    let mut fields = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match name.parse::<SearchField>() {
            Ok(field) if !fields.contains(&field) => fields.push(field),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Ignoring search field"),
        }
    }
    fields
}
