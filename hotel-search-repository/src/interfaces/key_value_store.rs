//! Key-value store trait definition.
//!
//! This module defines the abstract interface for persisted app state, allowing
//! for different backend implementations (in-memory, files on disk, etc.).

use async_trait::async_trait;

use crate::errors::StoreError;

/// Abstracts the underlying storage used by the favorites, profile and trip stores.
///
/// Values are opaque strings; the stores encode them as JSON. Implementations are
/// injected into the stores to enable dependency injection and easy testing with
/// mock implementations.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - If a value is stored
    /// * `Ok(None)` - If nothing is stored under the key
    /// * `Err(StoreError)` - If the backend could not be read
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`.
    ///
    /// Removing a missing key is considered successful.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
