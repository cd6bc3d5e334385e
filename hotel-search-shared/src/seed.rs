//! Built-in seed dataset.
//!
//! The three hotels shipped with the app, used when no dataset file is configured.

use crate::types::HotelRecord;

/// Hotel ids that are favorites on a fresh install.
pub const DEFAULT_FAVORITE_IDS: [u32; 2] = [1, 3];

/// The seed hotels, in catalog order.
pub fn hotels() -> Vec<HotelRecord> {
    vec![
        HotelRecord::new(
            1,
            "The Phoenix Hotel",
            &["Popular", "Modern"],
            "Sleman, DIY",
            4.8,
            125.0,
        )
        .with_image("hotels/ThePhoenixHotel.jpg"),
        HotelRecord::new(
            2,
            "Aston White Coral",
            &["Popular", "Beach"],
            "Sleman, DIY",
            4.8,
            130.0,
        )
        .with_image("hotels/AstonWhiteCoral.jpg"),
        HotelRecord::new(
            3,
            "Keraton Villa",
            &["Popular", "Modern"],
            "Sleman, DIY",
            4.8,
            225.0,
        )
        .with_discount(200.0)
        .with_image("hotels/KeratonVilla.jpg"),
    ]
}
