//! Booking types for the trip-tracking flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hotel_record::HotelRecord;

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Returns true if the booking can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A confirmed stay, as shown in the trips list.
///
/// The hotel is embedded as a snapshot taken at booking time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub hotel: HotelRecord,
    pub nights: u32,
    pub total_price: f64,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Create a confirmed booking with a fresh id, priced at the hotel's effective
    /// nightly price.
    pub fn confirmed(hotel: HotelRecord, nights: u32) -> Self {
        let total_price = hotel.effective_price() * f64::from(nights);
        Self {
            id: Uuid::new_v4(),
            hotel,
            nights,
            total_price,
            booking_date: Utc::now(),
            status: BookingStatus::Confirmed,
        }
    }
}
