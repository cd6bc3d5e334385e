//! # Hotel Search Repository
//!
//! This crate provides the persistence collaborators of the hotel search app. It
//! defines a small key-value storage interface, two providers for it, and the
//! stores built on top: favorites, profile, and booked trips.

pub mod config;
pub mod errors;
pub mod favorites;
pub mod interfaces;
pub mod profile;
pub mod providers;
pub mod trips;
pub mod types;
pub mod utils;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use favorites::FavoritesStore;
pub use interfaces::KeyValueStore;
pub use profile::ProfileStore;
pub use providers::{InMemoryStore, JsonFileStore};
pub use trips::TripStore;
pub use types::FavoriteChange;
