//! Trip store.
//!
//! Keeps the user's bookings, newest first, and persists the list through a
//! `KeyValueStore`.

use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use hotel_search_shared::{Booking, BookingStatus};

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::KeyValueStore;
use crate::utils::{load_json, save_json};

pub struct TripStore {
    provider: Arc<dyn KeyValueStore>,
    key: String,
    max_bookings: Option<usize>,
    bookings: Vec<Booking>,
}

impl TripStore {
    pub fn new(provider: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        Self {
            provider,
            key: config.bookings_key.clone(),
            max_bookings: config.max_bookings,
            bookings: Vec::new(),
        }
    }

    /// Restore persisted bookings.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&mut self) -> Result<(), StoreError> {
        if let Some(bookings) = load_json(self.provider.as_ref(), &self.key).await? {
            self.bookings = bookings;
            info!(count = self.bookings.len(), "Trips restored");
        }
        Ok(())
    }

    /// All bookings, newest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Record a new booking at the front of the list and persist.
    ///
    /// A booking whose id is already present is ignored, so replaying the same
    /// confirmation never duplicates a trip.
    #[instrument(skip(self, booking), fields(booking_id = %booking.id))]
    pub async fn add(&mut self, booking: Booking) -> Result<(), StoreError> {
        if self.get(booking.id).is_some() {
            warn!("Booking already recorded, ignoring");
            return Ok(());
        }

        info!(hotel = %booking.hotel.name, nights = booking.nights, "Booking recorded");
        self.bookings.insert(0, booking);
        if let Some(max) = self.max_bookings {
            self.bookings.truncate(max);
        }
        self.persist().await
    }

    /// Mark a booking as cancelled and persist.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the booking is now cancelled
    /// * `Err(StoreError::BookingNotFound)` - If no booking has this id
    /// * `Err(StoreError::BookingNotCancellable)` - If it is already cancelled or completed
    #[instrument(skip(self))]
    pub async fn cancel(&mut self, id: Uuid) -> Result<(), StoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::booking_not_found(id))?;

        if !booking.status.is_cancellable() {
            return Err(StoreError::booking_not_cancellable(
                id,
                format!("{:?}", booking.status),
            ));
        }

        booking.status = BookingStatus::Cancelled;
        self.persist().await
    }

    async fn persist(&self) -> Result<(), StoreError> {
        save_json(self.provider.as_ref(), &self.key, &self.bookings).await
    }
}
