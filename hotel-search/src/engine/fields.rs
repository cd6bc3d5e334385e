//! Search fields and case-insensitive field matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use hotel_search_shared::HotelRecord;

use crate::errors::UnknownSearchField;

/// A record field the free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Id,
    Name,
    Location,
    Category,
    Rating,
    Price,
    DiscountedPrice,
}

/// Fields searched when none are configured.
pub const DEFAULT_SEARCH_FIELDS: [SearchField; 3] =
    [SearchField::Name, SearchField::Location, SearchField::Category];

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Name => "name",
            SearchField::Location => "location",
            SearchField::Category => "category",
            SearchField::Rating => "rating",
            SearchField::Price => "price",
            SearchField::DiscountedPrice => "discountedPrice",
        }
    }

    /// Extract this field from a record.
    ///
    /// Returns `None` when the record has no usable value: an empty string, an
    /// empty category list, or an absent discounted price. Missing values never match.
    pub fn value<'a>(&self, record: &'a HotelRecord) -> Option<FieldValue<'a>> {
        match self {
            SearchField::Id => Some(FieldValue::Number(f64::from(record.id))),
            SearchField::Name => non_empty(&record.name).map(FieldValue::Text),
            SearchField::Location => non_empty(&record.location).map(FieldValue::Text),
            SearchField::Category => {
                (!record.category.is_empty()).then(|| FieldValue::List(&record.category))
            }
            SearchField::Rating => Some(FieldValue::Number(record.rating)),
            SearchField::Price => Some(FieldValue::Number(record.price)),
            SearchField::DiscountedPrice => record.discounted_price.map(FieldValue::Number),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = UnknownSearchField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SearchField::Id),
            "name" => Ok(SearchField::Name),
            "location" => Ok(SearchField::Location),
            "category" | "categories" => Ok(SearchField::Category),
            "rating" => Ok(SearchField::Rating),
            "price" => Ok(SearchField::Price),
            "discountedprice" | "discounted_price" => Ok(SearchField::DiscountedPrice),
            _ => Err(UnknownSearchField(s.to_string())),
        }
    }
}

/// A field value, classified by how it is matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Matched by case-insensitive substring.
    Text(&'a str),
    /// Matched if any element matches as text.
    List(&'a [String]),
    /// Matched against its decimal rendering.
    Number(f64),
}

impl FieldValue<'_> {
    /// Returns true if the value contains `needle`. `needle` must already be lower-cased.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(needle),
            FieldValue::List(items) => items.iter().any(|item| item.to_lowercase().contains(needle)),
            FieldValue::Number(n) => render_number(*n).contains(needle),
        }
    }

    /// Returns true if the value equals `needle`. `needle` must already be lower-cased.
    pub fn equals(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase() == needle,
            FieldValue::List(items) => items.iter().any(|item| item.to_lowercase() == needle),
            FieldValue::Number(n) => render_number(*n) == needle,
        }
    }
}

/// Shortest decimal rendering: `125.0` becomes `"125"`, `4.8` stays `"4.8"`.
pub fn render_number(n: f64) -> String {
    n.to_string()
}

/// Returns true if any of `fields` of `record` contains `needle`.
pub fn matches_any(record: &HotelRecord, fields: &[SearchField], needle: &str) -> bool {
    fields
        .iter()
        .filter_map(|field| field.value(record))
        .any(|value| value.contains(needle))
}

/// Returns true if any of `fields` of `record` equals `needle` exactly.
pub fn exact_match_any(record: &HotelRecord, fields: &[SearchField], needle: &str) -> bool {
    fields
        .iter()
        .filter_map(|field| field.value(record))
        .any(|value| value.equals(needle))
}

/// Trim and lower-case a raw query. Returns `None` for an empty or whitespace-only query.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}
