//! In-memory search and filter engine.
//!
//! Given a fixed dataset, a free-text query and a `FilterSpec`, the engine computes
//! a relevance-ranked result list. Results are a pure function of
//! `(dataset, query, filters, fields)`: every mutation recomputes them in full,
//! and the derived flags (`is_searching`, `has_active_filters`) are computed on
//! demand rather than stored.
//!
//! ## Evaluation
//!
//! 1. If the filters are active they pre-filter the dataset (all four dimensions
//!    must match).
//! 2. If the trimmed query is non-empty, surviving records must match it in at
//!    least one configured field, and are ranked exact-match first.
//! 3. Otherwise, with active filters only, survivors are ranked by rating, price
//!    and name.
//! 4. With neither a query nor active filters the result list is empty.

pub mod fields;
pub mod filters;
pub mod ranking;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use hotel_search_shared::{FilterSpec, HotelRecord};

pub use fields::{SearchField, DEFAULT_SEARCH_FIELDS};
pub use filters::FilterOutcome;

use fields::{exact_match_any, matches_any, normalize_query};
use ranking::{compare_quality, compare_relevance, rank, RankKey};

/// Which evaluation path produced the current results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
    /// No query and neutral filters: results are empty.
    Idle,
    /// Active filters with an empty query.
    FilterOnly,
    /// Non-empty query, optionally pre-filtered.
    Query,
}

impl SearchMode {
    pub fn of(query: &str, filters: &FilterSpec) -> Self {
        if normalize_query(query).is_some() {
            SearchMode::Query
        } else if filters.is_active() {
            SearchMode::FilterOnly
        } else {
            SearchMode::Idle
        }
    }
}

/// Compute the ordered result list for a dataset, query and filter spec.
///
/// This is the pure function behind `SearchFilterEngine::results`.
pub fn evaluate<'a>(
    dataset: &'a [HotelRecord],
    query: &str,
    filters: &FilterSpec,
    fields: &[SearchField],
) -> Vec<&'a HotelRecord> {
    let filtering = filters.is_active();
    let survivors = dataset
        .iter()
        .filter(|record| !filtering || filters::passes(filters, record));

    match normalize_query(query) {
        Some(needle) => {
            let candidates = survivors
                .filter(|record| matches_any(record, fields, &needle))
                .map(|record| {
                    let exact = exact_match_any(record, fields, &needle);
                    (RankKey::new(record, exact), record)
                })
                .collect();
            rank(candidates, compare_relevance)
        }
        None if filtering => {
            let candidates = survivors
                .map(|record| (RankKey::new(record, false), record))
                .collect();
            rank(candidates, compare_quality)
        }
        None => Vec::new(),
    }
}

/// Search session state over a fixed dataset.
///
/// Created once per screen session and mutated only through its entry points.
///
/// # Example
///
/// ```
/// use hotel_search::engine::SearchFilterEngine;
/// use hotel_search_shared::seed;
///
/// let mut engine = SearchFilterEngine::new(seed::hotels());
/// engine.set_query("villa");
///
/// let names: Vec<&str> = engine.results().iter().map(|h| h.name.as_str()).collect();
/// assert_eq!(names, vec!["Keraton Villa"]);
/// assert!(engine.is_searching());
/// ```
#[derive(Debug, Clone)]
pub struct SearchFilterEngine {
    dataset: Arc<[HotelRecord]>,
    fields: Vec<SearchField>,
    query: String,
    filters: FilterSpec,
    results: Vec<HotelRecord>,
}

impl SearchFilterEngine {
    /// Create an engine searching the default fields (name, location, category).
    pub fn new(dataset: impl Into<Arc<[HotelRecord]>>) -> Self {
        Self::with_fields(dataset, DEFAULT_SEARCH_FIELDS.to_vec())
    }

    /// Create an engine searching the given fields.
    ///
    /// Records whose id already appeared earlier in the dataset are dropped.
    pub fn with_fields(dataset: impl Into<Arc<[HotelRecord]>>, fields: Vec<SearchField>) -> Self {
        Self {
            dataset: dedup_by_id(dataset.into()),
            fields,
            query: String::new(),
            filters: FilterSpec::neutral(),
            results: Vec::new(),
        }
    }

    /// Store the raw query text and recompute results.
    ///
    /// Empty or whitespace-only text is treated as no query.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.recompute();
    }

    /// Replace the filter spec and recompute results.
    ///
    /// The spec is not validated: an inverted price range simply matches nothing.
    pub fn set_filters(&mut self, spec: FilterSpec) {
        self.filters = spec;
        self.recompute();
    }

    /// Reset the query to empty.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.recompute();
    }

    /// Reset the filters to neutral.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::neutral();
        self.recompute();
    }

    /// Reset both the query and the filters, returning to the initial state.
    pub fn clear_all(&mut self) {
        self.query.clear();
        self.filters = FilterSpec::neutral();
        self.recompute();
    }

    /// The current ordered results.
    pub fn results(&self) -> &[HotelRecord] {
        &self.results
    }

    /// The raw query, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn dataset(&self) -> &[HotelRecord] {
        &self.dataset
    }

    pub fn mode(&self) -> SearchMode {
        SearchMode::of(&self.query, &self.filters)
    }

    /// True if the trimmed query is non-empty or the filters are active.
    pub fn is_searching(&self) -> bool {
        self.mode() != SearchMode::Idle
    }

    /// True if the filters differ from the neutral spec.
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// True when the "No hotels found" empty state should be shown.
    pub fn shows_empty_state(&self) -> bool {
        self.results.is_empty() && self.is_searching()
    }

    fn recompute(&mut self) {
        self.results = evaluate(&self.dataset, &self.query, &self.filters, &self.fields)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            mode = ?self.mode(),
            query = %self.query.trim(),
            active_filters = self.has_active_filters(),
            result_count = self.results.len(),
            "Search results recomputed"
        );
    }
}

fn dedup_by_id(dataset: Arc<[HotelRecord]>) -> Arc<[HotelRecord]> {
    let mut seen = HashSet::with_capacity(dataset.len());
    if dataset.iter().all(|record| seen.insert(record.id)) {
        return dataset;
    }

    seen.clear();
    let unique: Vec<HotelRecord> = dataset
        .iter()
        .filter(|record| {
            let first = seen.insert(record.id);
            if !first {
                warn!(hotel_id = record.id, name = %record.name, "Duplicate hotel id dropped");
            }
            first
        })
        .cloned()
        .collect();
    unique.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_search_shared::{seed, PriceRange};

    fn names(engine: &SearchFilterEngine) -> Vec<&str> {
        engine.results().iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = SearchFilterEngine::new(seed::hotels());
        assert!(engine.results().is_empty());
        assert!(!engine.is_searching());
        assert!(!engine.has_active_filters());
        assert_eq!(engine.mode(), SearchMode::Idle);
    }

    #[test]
    fn test_whitespace_query_is_no_query() {
        let mut engine = SearchFilterEngine::new(seed::hotels());
        engine.set_query("   ");
        assert_eq!(engine.query(), "   ");
        assert!(!engine.is_searching());
        assert!(engine.results().is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let mut engine = SearchFilterEngine::new(seed::hotels());
        engine.set_query("  VILLA ");
        assert_eq!(names(&engine), vec!["Keraton Villa"]);
    }

    #[test]
    fn test_filters_win_over_query() {
        let mut engine = SearchFilterEngine::new(seed::hotels());
        engine.set_filters(FilterSpec::neutral().with_price_range(PriceRange::new(0.0, 130.0)));
        engine.set_query("villa");
        assert!(engine.results().is_empty());
        assert!(engine.shows_empty_state());
    }

    #[test]
    fn test_neutral_filters_do_not_bound_query_results() {
        let pricey = HotelRecord::new(9, "Royal Villa", &["Luxury"], "Bantul, DIY", 5.0, 450.0);
        let mut dataset = seed::hotels();
        dataset.push(pricey);

        let mut engine = SearchFilterEngine::new(dataset);
        engine.set_query("villa");
        // Higher rating first; the neutral price bound does not apply.
        assert_eq!(names(&engine), vec!["Royal Villa", "Keraton Villa"]);
    }

    #[test]
    fn test_clear_query_keeps_filters() {
        let mut engine = SearchFilterEngine::new(seed::hotels());
        engine.set_filters(FilterSpec::neutral().with_category("Beach"));
        engine.set_query("phoenix");
        assert!(engine.results().is_empty());

        engine.clear_query();
        assert_eq!(engine.mode(), SearchMode::FilterOnly);
        assert!(engine.is_searching());
        assert_eq!(names(&engine), vec!["Aston White Coral"]);
    }

    #[test]
    fn test_clear_filters_keeps_query() {
        let mut engine = SearchFilterEngine::new(seed::hotels());
        engine.set_filters(FilterSpec::neutral().with_category("Beach"));
        engine.set_query("phoenix");

        engine.clear_filters();
        assert!(!engine.has_active_filters());
        assert!(engine.is_searching());
        assert_eq!(names(&engine), vec!["The Phoenix Hotel"]);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut dataset = seed::hotels();
        let mut dup = dataset[0].clone();
        dup.name = "Phoenix Copy".to_string();
        dataset.push(dup);

        let mut engine = SearchFilterEngine::new(dataset);
        assert_eq!(engine.dataset().len(), 3);

        engine.set_query("phoenix");
        assert_eq!(names(&engine), vec!["The Phoenix Hotel"]);
    }

    #[test]
    fn test_custom_fields() {
        let mut engine = SearchFilterEngine::with_fields(seed::hotels(), vec![SearchField::Price]);
        engine.set_query("13");
        assert_eq!(names(&engine), vec!["Aston White Coral"]);

        engine.set_query("villa");
        assert!(engine.results().is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let mut engine = SearchFilterEngine::new(Vec::<HotelRecord>::new());
        engine.set_query("anything");
        engine.set_filters(FilterSpec::neutral().with_min_rating(4.0));
        assert!(engine.results().is_empty());
        assert!(engine.shows_empty_state());
    }
}
