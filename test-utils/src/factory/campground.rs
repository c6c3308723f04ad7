//! Campground factory for creating test campground entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campgrounds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::campground::CampgroundFactory;
///
/// let campground = CampgroundFactory::new(&db, user.id)
///     .title("Lakeside")
///     .price(12.5)
///     .coordinates(-110.5, 44.6)
///     .build()
///     .await?;
/// ```
pub struct CampgroundFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    slug: Option<String>,
    title: String,
    price: f64,
    description: String,
    location: String,
    longitude: f64,
    latitude: f64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl<'a> CampgroundFactory<'a> {
    /// Creates a new CampgroundFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Campground {id}"`, slug: `"campground-{id}"`
    /// - price: `20.0`
    /// - location: `"Yosemite Valley, California"`
    /// - coordinates: `(-119.5383, 37.8651)`
    /// - created_at: now, updated_at: created_at
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            slug: Some(format!("campground-{}", id)),
            title: format!("Campground {}", id),
            price: 20.0,
            description: "A quiet spot under the pines with room for two tents.".to_string(),
            location: "Yosemite Valley, California".to_string(),
            longitude: -119.5383,
            latitude: 37.8651,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Sets the title. The slug is left unchanged.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Leaves the slug unset, as on rows imported before slugs existed.
    pub fn without_slug(mut self) -> Self {
        self.slug = None;
        self
    }

    /// Sets the nightly price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the free-text location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the point geometry.
    ///
    /// # Arguments
    /// - `longitude` - Degrees east
    /// - `latitude` - Degrees north
    pub fn coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the last modification timestamp. Defaults to the creation timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds and inserts the campground entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campground::Model)` - Created campground entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campground::Model, DbErr> {
        entity::campground::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at.unwrap_or(self.created_at)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campground with default values for the given author.
pub async fn create_campground(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::campground::Model, DbErr> {
    CampgroundFactory::new(db, author_id).build().await
}
