//! Utility functions for the stores.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;
use crate::interfaces::KeyValueStore;

/// Read and decode the JSON value stored under `key`.
///
/// # Returns
///
/// * `Ok(Some(T))` - If a value is stored and decodes as `T`
/// * `Ok(None)` - If nothing is stored
/// * `Err(StoreError::SerializationError)` - If the stored value is not valid JSON for `T`
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::serialization(format!("Invalid value for {}: {}", key, e))),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
