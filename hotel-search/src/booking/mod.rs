//! Booking arithmetic and confirmation.
//!
//! Prices a stay at the hotel's effective nightly price and turns a validated
//! number of nights into a confirmed `Booking`.

use serde::{Deserialize, Serialize};
use tracing::info;

use hotel_search_shared::{Booking, HotelRecord};

use crate::errors::BookingError;

/// Price summary shown before a booking is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nights: u32,
    pub nightly_price: f64,
    pub total_price: f64,
    /// Total saved compared to the base price. Zero without a discount.
    pub total_savings: f64,
}

impl BookingQuote {
    pub fn new(hotel: &HotelRecord, nights: u32) -> Self {
        let count = f64::from(nights);
        Self {
            nights,
            nightly_price: hotel.effective_price(),
            total_price: hotel.effective_price() * count,
            total_savings: hotel.savings_per_night() * count,
        }
    }
}

/// Parse the nights input field. Non-digit characters are stripped first, as the
/// input box does; an empty or zero result is rejected.
///
/// A count that does not fit in a `u32` is rejected as well rather than clamped.
pub fn parse_nights(input: &str) -> Result<u32, BookingError> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u32>() {
        Ok(nights) if nights > 0 => Ok(nights),
        _ => Err(BookingError::invalid_nights(input)),
    }
}

/// Confirm a stay of `nights` at `hotel`.
pub fn confirm(hotel: &HotelRecord, nights: u32) -> Result<Booking, BookingError> {
    if nights == 0 {
        return Err(BookingError::invalid_nights(nights.to_string()));
    }

    let booking = Booking::confirmed(hotel.clone(), nights);
    info!(
        booking_id = %booking.id,
        hotel = %hotel.name,
        nights,
        total_price = booking.total_price,
        "Booking confirmed"
    );
    Ok(booking)
}
