//! Sorting for the "see all" listing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use hotel_search_shared::HotelRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Current sort selection. Starts at name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    /// Select a sort key: the current key flips the order, a new key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.reversed();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }

    pub fn compare(&self, a: &HotelRecord, b: &HotelRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.effective_price().total_cmp(&b.effective_price()),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Stable-sort a copy of `records` by `state`.
pub fn sorted(records: &[HotelRecord], state: SortState) -> Vec<HotelRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| state.compare(a, b));
    sorted
}
