//! Filter specification types.
//!
//! This module defines the structured filter set produced by the filter modal and
//! consumed by the search engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lower bound of the neutral price range.
pub const NEUTRAL_MIN_PRICE: f64 = 0.0;

/// Upper bound of the neutral price range.
pub const NEUTRAL_MAX_PRICE: f64 = 200.0;

/// Inclusive price bounds applied to the effective nightly price.
///
/// Serialized as a two-element array `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `price` lies within `[min, max]`.
    ///
    /// An inverted range (`min > max`) contains nothing.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(NEUTRAL_MIN_PRICE, NEUTRAL_MAX_PRICE)
    }
}

impl From<(f64, f64)> for PriceRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (f64, f64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

/// Structured filter set applied before any text matching.
///
/// An empty location or category set means "no restriction" on that dimension, and
/// a `min_rating` of 0 means "any rating". The `Default` value is the neutral spec.
///
/// # Example
///
/// ```
/// use hotel_search_shared::{FilterSpec, PriceRange};
///
/// let spec = FilterSpec::neutral().with_price_range(PriceRange::new(0.0, 130.0));
/// assert!(spec.is_active());
/// assert!(!FilterSpec::neutral().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub selected_locations: BTreeSet<String>,
    #[serde(default)]
    pub selected_categories: BTreeSet<String>,
    #[serde(default)]
    pub min_rating: f64,
}

impl FilterSpec {
    /// The neutral spec: price range (0, 200), no locations, no categories, rating 0.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Returns true if any field differs from the neutral spec.
    pub fn is_active(&self) -> bool {
        *self != Self::neutral()
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.selected_locations.insert(location.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_categories.insert(category.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Add the location if absent, remove it if present.
    ///
    /// Returns true if the location is selected afterwards.
    pub fn toggle_location(&mut self, location: &str) -> bool {
        toggle(&mut self.selected_locations, location)
    }

    /// Add the category if absent, remove it if present.
    ///
    /// Returns true if the category is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.selected_categories, category)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

/// A labelled price bucket offered by the filter modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeOption {
    pub label: String,
    pub range: PriceRange,
}

impl PriceRangeOption {
    fn new(label: &str, min: f64, max: f64) -> Self {
        Self {
            label: label.to_string(),
            range: PriceRange::new(min, max),
        }
    }

    /// The preset buckets, in display order.
    ///
    /// "Any Price" coincides with the neutral range, so choosing it leaves the
    /// filters inactive.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new("Any Price", NEUTRAL_MIN_PRICE, NEUTRAL_MAX_PRICE),
            Self::new("$0 - $50", 0.0, 50.0),
            Self::new("$51 - $100", 51.0, 100.0),
            Self::new("$101 - $150", 101.0, 150.0),
            Self::new("$151 - $200", 151.0, 200.0),
            Self::new("$200+", 200.0, 500.0),
        ]
    }

    /// Returns true if `spec` currently uses this bucket's range.
    pub fn is_selected(&self, spec: &FilterSpec) -> bool {
        spec.price_range == self.range
    }
}
