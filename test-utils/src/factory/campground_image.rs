//! Campground image factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating images attached to a campground.
pub struct CampgroundImageFactory<'a> {
    db: &'a DatabaseConnection,
    campground_id: i32,
    url: String,
    filename: String,
    alt: Option<String>,
    position: i32,
}

impl<'a> CampgroundImageFactory<'a> {
    /// Creates a new factory with a Cloudinary-shaped default URL and filename.
    pub fn new(db: &'a DatabaseConnection, campground_id: i32) -> Self {
        let id = next_id();
        let filename = format!("outdoorsy/image_{}", id);
        Self {
            db,
            campground_id,
            url: format!(
                "https://res.cloudinary.com/demo/image/upload/v1/{}.jpg",
                filename
            ),
            filename,
            alt: None,
            position: 0,
        }
    }

    /// Sets the media host public id and derives a matching URL.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self.url = format!(
            "https://res.cloudinary.com/demo/image/upload/v1/{}.jpg",
            self.filename
        );
        self
    }

    /// Sets the alt text.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Sets the display position.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the image.
    pub async fn build(self) -> Result<entity::campground_image::Model, DbErr> {
        entity::campground_image::ActiveModel {
            campground_id: ActiveValue::Set(self.campground_id),
            url: ActiveValue::Set(self.url),
            filename: ActiveValue::Set(self.filename),
            alt: ActiveValue::Set(self.alt),
            position: ActiveValue::Set(self.position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values for the given campground.
pub async fn create_image(
    db: &DatabaseConnection,
    campground_id: i32,
) -> Result<entity::campground_image::Model, DbErr> {
    CampgroundImageFactory::new(db, campground_id).build().await
}
