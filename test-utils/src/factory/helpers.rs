//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a campground authored by them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, campground))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_campground_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::campground::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let campground = crate::factory::campground::create_campground(db, user.id).await?;

    Ok((user, campground))
}

/// Creates a user, a campground authored by them, and a review of that campground
/// written by the same user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, campground, review))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::campground::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let (user, campground) = create_campground_with_author(db).await?;
    let review = crate::factory::review::create_review(db, campground.id, user.id).await?;

    Ok((user, campground, review))
}
