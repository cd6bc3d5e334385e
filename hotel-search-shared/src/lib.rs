//! # Hotel Search Shared
//!
//! This crate defines shared data structures and types used across the hotel search
//! workspace. It includes the hotel record, the filter specification built by the
//! filter modal, bookings, the user profile, and the built-in seed dataset.

pub mod seed;
pub mod types;

pub use types::booking::{Booking, BookingStatus};
pub use types::filter_spec::{FilterSpec, PriceRange, PriceRangeOption};
pub use types::hotel_record::HotelRecord;
pub use types::profile::{ProfileData, ProfileUpdate};
