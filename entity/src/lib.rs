//! SeaORM entity definitions for the Outdoorsy schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are
//! declared so that `find_also_related` / `find_with_related` work across users,
//! campgrounds, their images, reviews and favorites.

pub mod prelude;

pub mod campground;
pub mod campground_image;
pub mod review;
pub mod user;
pub mod user_favorite;
