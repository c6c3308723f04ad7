//! In-memory user models.

use chrono::{TimeZone, Utc};

/// Returns a user model with id `1` and fixed values.
pub fn entity() -> entity::user::Model {
    entity::user::Model {
        id: 1,
        email: "camper@example.com".to_string(),
        username: "camper".to_string(),
        password_hash: crate::factory::user::UNUSABLE_PASSWORD_HASH.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
