//! This module defines the core data structures shared by the engine, the catalog,
//! and the persistence stores.

pub mod booking;
pub mod filter_spec;
pub mod hotel_record;
pub mod profile;

pub use booking::{Booking, BookingStatus};
pub use filter_spec::{FilterSpec, PriceRange, PriceRangeOption};
pub use hotel_record::HotelRecord;
pub use profile::{ProfileData, ProfileUpdate};
