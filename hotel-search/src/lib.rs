//! # Hotel Search
//!
//! In-memory search and filter engine for a static hotel catalog, together with
//! the browsing, booking and persistence collaborators a hotel-browsing client
//! needs.
//!
//! ## Architecture
//!
//! A session is a set of explicitly wired components:
//!
//! 1. **Catalog**: The fixed dataset and its browsing views
//! 2. **Engine**: Free-text query plus structured filters, ranked results
//! 3. **Stores**: Favorites, profile and trips, persisted through a key-value provider
//! 4. **Booking**: Quote arithmetic and confirmation
//!
//! ## Modules
//!
//! - [`engine`]: Field matching, filter predicates, ranking and session state
//! - [`catalog`]: Dataset loading, category/location browsing, sorting
//! - [`booking`]: Nights parsing, quotes and confirmation
//! - [`config`]: Configuration and dependency initialization
//! - [`errors`]: Error types for the application

pub mod booking;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;

pub use config::{AppConfig, Dependencies};
pub use engine::{SearchFilterEngine, SearchMode};
pub use errors::{BookingError, CatalogError};

use hotel_search_repository::StoreError;
use thiserror::Error;

/// Errors that can occur during session initialization or execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Catalog error.
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    /// Storage error.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// Booking error.
    #[error("Booking error: {0}")]
    BookingError(#[from] BookingError),

    /// Results could not be written out.
    #[error("Output error: {0}")]
    OutputError(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }
}
