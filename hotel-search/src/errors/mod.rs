//! Error types for the hotel search application.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the hotel catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read catalog {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// The dataset file is not a JSON array of hotel records.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl CatalogError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadError {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

/// Errors that can occur in the booking flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The number of nights is missing, zero, or not a number.
    #[error("Invalid number of nights: {0:?}")]
    InvalidNights(String),
}

impl BookingError {
    /// Create an invalid nights error.
    pub fn invalid_nights(input: impl Into<String>) -> Self {
        Self::InvalidNights(input.into())
    }
}

/// A search field name that does not correspond to any record field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown search field: {0}")]
pub struct UnknownSearchField(pub String);
