//! Hotel catalog.
//!
//! The dataset provider for a session: a fixed, shared list of hotels plus the
//! browsing views that do not involve the search engine (category tabs, nearby
//! locations, filter-modal chip lists, and the sortable "see all" listing).

mod sorting;

pub use sorting::{sorted, SortKey, SortOrder, SortState};

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use hotel_search_shared::{seed, HotelRecord};

use crate::errors::CatalogError;

/// Category tab labels, in display order.
pub const CATEGORY_TABS: [&str; 6] = ["Popular", "Modern", "Beach", "Mountain", "Luxury", "Budget"];

/// Pseudo-category that selects every hotel.
pub const ALL_CATEGORIES: &str = "All";

/// Locations offered by the nearby section.
pub const NEARBY_LOCATIONS: [&str; 5] = [
    "Sleman, DIY",
    "Bantul, DIY",
    "Kulon Progo, DIY",
    "Gunung Kidul, DIY",
    "Yogyakarta City, DIY",
];

#[derive(Debug, Clone)]
pub struct Catalog {
    hotels: Arc<[HotelRecord]>,
}

impl Catalog {
    pub fn new(hotels: impl Into<Arc<[HotelRecord]>>) -> Self {
        Self {
            hotels: hotels.into(),
        }
    }

    /// The built-in seed catalog.
    pub fn seed() -> Self {
        Self::new(seed::hotels())
    }

    /// Load a catalog from a JSON array of hotel records.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::read(path, e.to_string()))?;
        let hotels: Vec<HotelRecord> = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::parse(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), count = hotels.len(), "Catalog loaded");
        Ok(Self::new(hotels))
    }

    pub fn hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }

    /// The shared dataset handed to the search engine.
    pub fn shared(&self) -> Arc<[HotelRecord]> {
        Arc::clone(&self.hotels)
    }

    pub fn get(&self, id: u32) -> Option<&HotelRecord> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Hotels tagged with `category`, or every hotel for `"All"`.
    pub fn by_category(&self, category: &str) -> Vec<&HotelRecord> {
        self.hotels
            .iter()
            .filter(|h| category == ALL_CATEGORIES || h.in_category(category))
            .collect()
    }

    /// Hotels whose location is exactly `location`.
    pub fn by_location(&self, location: &str) -> Vec<&HotelRecord> {
        self.hotels
            .iter()
            .filter(|h| h.location == location)
            .collect()
    }

    /// One section per category tab, in tab order. Empty tabs are kept.
    pub fn category_sections(&self) -> Vec<(&'static str, Vec<&HotelRecord>)> {
        CATEGORY_TABS
            .iter()
            .map(|tab| (*tab, self.by_category(tab)))
            .collect()
    }

    /// One section per nearby location, in display order. Empty locations are kept.
    pub fn nearby_sections(&self) -> Vec<(&'static str, Vec<&HotelRecord>)> {
        NEARBY_LOCATIONS
            .iter()
            .map(|location| (*location, self.by_location(location)))
            .collect()
    }

    /// Distinct locations, in first-seen order.
    pub fn unique_locations(&self) -> Vec<&str> {
        first_seen(self.hotels.iter().map(|h| h.location.as_str()))
    }

    /// Distinct categories, in first-seen order.
    pub fn unique_categories(&self) -> Vec<&str> {
        first_seen(
            self.hotels
                .iter()
                .flat_map(|h| h.category.iter().map(String::as_str)),
        )
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
