//! Filter predicate composition.
//!
//! A record passes a `FilterSpec` only if every dimension matches; there is no
//! OR-combination across dimensions.

use hotel_search_shared::{FilterSpec, HotelRecord};

/// Per-dimension outcome of applying a `FilterSpec` to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Effective price lies within the inclusive price range.
    pub price: bool,
    /// No location restriction, or the record's location is selected.
    pub location: bool,
    /// No category restriction, or the record shares a category with the selection.
    pub category: bool,
    /// Rating is at least the minimum.
    pub rating: bool,
}

impl FilterOutcome {
    pub fn evaluate(spec: &FilterSpec, record: &HotelRecord) -> Self {
        Self {
            price: spec.price_range.contains(record.effective_price()),
            location: spec.selected_locations.is_empty()
                || spec.selected_locations.contains(&record.location),
            category: spec.selected_categories.is_empty()
                || record
                    .category
                    .iter()
                    .any(|c| spec.selected_categories.contains(c)),
            rating: record.rating >= spec.min_rating,
        }
    }

    /// Returns true if all four dimensions match.
    pub fn passes(&self) -> bool {
        self.price && self.location && self.category && self.rating
    }
}

/// Returns true if `record` satisfies every dimension of `spec`.
pub fn passes(spec: &FilterSpec, record: &HotelRecord) -> bool {
    FilterOutcome::evaluate(spec, record).passes()
}
