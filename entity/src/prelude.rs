pub use super::campground::Entity as Campground;
pub use super::campground_image::Entity as CampgroundImage;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::user_favorite::Entity as UserFavorite;
