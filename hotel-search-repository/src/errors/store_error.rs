//! Storage error types.
//!
//! This module defines the unified error type for all storage operations,
//! including both low-level backend errors and store-level errors.

use thiserror::Error;
use uuid::Uuid;

/// Unified errors from storage operations.
///
/// Used by the `KeyValueStore` trait and by the favorites, profile and trip stores.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Reading from or writing to the storage backend failed.
    #[error("IO error: {0}")]
    IoError(String),

    /// Persisted data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The storage key is not usable by the backend.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// No booking with the given id exists.
    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    /// The booking exists but its status does not allow the operation.
    #[error("Booking {id} cannot be cancelled in status {status}")]
    BookingNotCancellable { id: Uuid, status: String },
}

impl StoreError {
    /// Create an IO error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an invalid key error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    /// Create a booking not found error.
    pub fn booking_not_found(id: Uuid) -> Self {
        Self::BookingNotFound(id)
    }

    /// Create a booking not cancellable error.
    pub fn booking_not_cancellable(id: Uuid, status: impl Into<String>) -> Self {
        Self::BookingNotCancellable {
            id,
            status: status.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
