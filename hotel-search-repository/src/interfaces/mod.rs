//! Interface definitions for the storage provider.
//!
//! This module defines the abstract `KeyValueStore` trait that allows for
//! dependency injection and swappable storage backends.

mod key_value_store;

pub use key_value_store::KeyValueStore;
