//! Hotel record types for the catalog.
//!
//! This module defines the immutable record the search engine ranks and the
//! presentation layer renders.

use serde::{Deserialize, Serialize};

/// A single hotel in the catalog.
///
/// Records are treated as immutable input by the search engine. The `is_favorite`
/// flag is owned by the favorites store and passed through untouched by ranking.
///
/// # Fields
///
/// - `id`: Unique identifier for the hotel
/// - `name`: Display name (primary search field)
/// - `category`: Tags the hotel belongs to (a hotel may carry several)
/// - `image`: Optional image reference, opaque to this crate
/// - `rating`: Score, observed range 0.0 to 5.0
/// - `price`: Base nightly price
/// - `discounted_price`: Optional effective nightly price
/// - `location`: Free-form "area, region" label
/// - `is_favorite`: Favorite flag decorated by the favorites store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: f64,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl HotelRecord {
    /// Create a record without a discount or image.
    ///
    /// # Example
    ///
    /// ```
    /// use hotel_search_shared::HotelRecord;
    ///
    /// let hotel = HotelRecord::new(1, "The Phoenix Hotel", &["Popular"], "Sleman, DIY", 4.8, 125.0);
    /// assert_eq!(hotel.effective_price(), 125.0);
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: &[&str],
        location: impl Into<String>,
        rating: f64,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.iter().map(|c| c.to_string()).collect(),
            image: None,
            rating,
            price,
            discounted_price: None,
            location: location.into(),
            is_favorite: false,
        }
    }

    /// Set the discounted nightly price.
    pub fn with_discount(mut self, discounted_price: f64) -> Self {
        self.discounted_price = Some(discounted_price);
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The price actually charged per night: the discounted price when present,
    /// otherwise the base price.
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Returns true if a discounted price below the base price is set.
    pub fn has_discount(&self) -> bool {
        matches!(self.discounted_price, Some(discounted) if discounted < self.price)
    }

    /// Amount saved per night compared to the base price. Zero when not discounted.
    pub fn savings_per_night(&self) -> f64 {
        if self.has_discount() {
            self.price - self.effective_price()
        } else {
            0.0
        }
    }

    /// Returns true if the record is tagged with exactly `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}
