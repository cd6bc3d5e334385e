//! Result ordering.
//!
//! Search mode orders by exact match first, then by quality. Filter-only mode
//! orders by quality alone. Quality is: higher rating, then lower effective price,
//! then name ascending (case-insensitive).

use std::cmp::Ordering;

use hotel_search_shared::HotelRecord;

/// Precomputed sort key for one candidate record.
#[derive(Debug, Clone, PartialEq)]
pub struct RankKey {
    pub exact: bool,
    pub rating: f64,
    pub effective_price: f64,
    pub folded_name: String,
}

impl RankKey {
    pub fn new(record: &HotelRecord, exact: bool) -> Self {
        Self {
            exact,
            rating: record.rating,
            effective_price: record.effective_price(),
            folded_name: record.name.to_lowercase(),
        }
    }
}

/// Exact matches before partial ones, then `compare_quality`.
pub fn compare_relevance(a: &RankKey, b: &RankKey) -> Ordering {
    b.exact.cmp(&a.exact).then_with(|| compare_quality(a, b))
}

/// Higher rating, then lower effective price, then name ascending.
pub fn compare_quality(a: &RankKey, b: &RankKey) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.effective_price.total_cmp(&b.effective_price))
        .then_with(|| a.folded_name.cmp(&b.folded_name))
}

/// Stable-sort `candidates` by their keys with `compare`, returning the records.
pub fn rank<'a>(
    mut candidates: Vec<(RankKey, &'a HotelRecord)>,
    compare: fn(&RankKey, &RankKey) -> Ordering,
) -> Vec<&'a HotelRecord> {
    candidates.sort_by(|(a, _), (b, _)| compare(a, b));
    candidates.into_iter().map(|(_, record)| record).collect()
}
