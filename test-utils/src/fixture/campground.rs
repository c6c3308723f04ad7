//! In-memory campground and image models.

use chrono::{TimeZone, Utc};

/// Returns a campground model with fixed, predictable values.
///
/// - id `1`, author id `1`
/// - slug `"pine-hollow"`, title `"Pine Hollow"`
/// - price `35.0`, coordinates `(-121.7, 46.8)`
/// - timestamps at 2025-01-01T00:00:00Z
pub fn entity() -> entity::campground::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    entity::campground::Model {
        id: 1,
        slug: Some("pine-hollow".to_string()),
        title: "Pine Hollow".to_string(),
        price: 35.0,
        description: "Shaded sites beside a cold mountain creek.".to_string(),
        location: "Ashford, Washington".to_string(),
        longitude: -121.7,
        latitude: 46.8,
        author_id: 1,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// Returns an image model belonging to `campground_id`.
pub fn image_entity(campground_id: i32) -> entity::campground_image::Model {
    entity::campground_image::Model {
        id: 1,
        campground_id,
        url: "https://res.cloudinary.com/demo/image/upload/v1/outdoorsy/pine.jpg".to_string(),
        filename: "outdoorsy/pine".to_string(),
        alt: Some("Tents under pines".to_string()),
        position: 0,
    }
}
