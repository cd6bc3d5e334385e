//! Error types for the hotel search repository.
//!
//! This module provides a unified error type for all storage operations.

mod store_error;

pub use store_error::StoreError;
