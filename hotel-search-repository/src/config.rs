//! Configuration types for the stores.

/// Default storage key for favorite hotel ids.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Default storage key for the user profile.
pub const DEFAULT_PROFILE_KEY: &str = "profileData";

/// Default storage key for booked trips.
pub const DEFAULT_BOOKINGS_KEY: &str = "userBookings";

/// Configuration shared by the favorites, profile and trip stores.
///
/// The keys select where each store persists its state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub favorites_key: String,
    pub profile_key: String,
    pub bookings_key: String,

    /// Maximum number of trips kept in history. Oldest trips are dropped first.
    ///
    /// Set to `None` to keep every trip. Defaults to 100.
    pub max_bookings: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            profile_key: DEFAULT_PROFILE_KEY.to_string(),
            bookings_key: DEFAULT_BOOKINGS_KEY.to_string(),
            max_bookings: Some(100),
        }
    }
}

impl StoreConfig {
    /// Set the trip history limit.
    pub fn with_max_bookings(mut self, max_bookings: Option<usize>) -> Self {
        self.max_bookings = max_bookings;
        self
    }
}
