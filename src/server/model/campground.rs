//! Campground domain models and parameters.
//!
//! Covers the listing itself with its ordered images, parameters for create and
//! update, and the query and result types for the index and nearby searches.

use chrono::{DateTime, Utc};

use crate::{
    model::campground::{CampgroundDto, ImageDto, NearbyCampgroundDto},
    server::{
        model::{
            geo::{GeoFilter, GeoPoint},
            review::ReviewPage,
            user::User,
        },
        util::{html::escape_html, url::join_path},
    },
};

/// Number of description characters shown in a map popup.
const POPUP_EXCERPT_CHARS: usize = 20;

/// An image attached to a campground.
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundImage {
    pub url: String,
    /// Media host public id.
    pub filename: String,
    pub alt: Option<String>,
    pub position: i32,
}

impl CampgroundImage {
    pub fn from_entity(entity: entity::campground_image::Model) -> Self {
        Self {
            url: entity.url,
            filename: entity.filename,
            alt: entity.alt,
            position: entity.position,
        }
    }

    /// URL of a 200px wide rendition, produced by the media host's URL transformations.
    pub fn thumbnail(&self) -> String {
        self.url.replacen("/upload/", "/upload/w_200/", 1)
    }

    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            thumbnail: self.thumbnail(),
            url: self.url,
            filename: self.filename,
            alt: self.alt,
        }
    }
}

/// An image that has been stored on the media host but not yet saved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub url: String,
    pub filename: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Campground {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub geometry: GeoPoint,
    pub author_id: i32,
    /// Ordered by position.
    pub images: Vec<CampgroundImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campground {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Campground row
    /// - `images` - Image rows belonging to the campground, in any order
    pub fn from_entity(
        entity: entity::campground::Model,
        images: Vec<entity::campground_image::Model>,
    ) -> Self {
        let mut images: Vec<CampgroundImage> =
            images.into_iter().map(CampgroundImage::from_entity).collect();
        images.sort_by_key(|image| image.position);

        Self {
            id: entity.id,
            slug: entity.slug.unwrap_or_default(),
            title: entity.title,
            price: entity.price,
            description: entity.description,
            location: entity.location,
            geometry: GeoPoint::new(entity.longitude, entity.latitude),
            author_id: entity.author_id,
            images,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Path of the canonical slug URL under `base_path`.
    pub fn canonical_path(&self, base_path: &str) -> String {
        join_path(base_path, &format!("/campgrounds/{}", self.slug))
    }

    /// Map popup HTML linking to the campground.
    pub fn popup_markup(&self, base_path: &str) -> String {
        let excerpt: String = self.description.chars().take(POPUP_EXCERPT_CHARS).collect();

        format!(
            "<strong><a href=\"{}\">{}</a></strong><p>{}...</p>",
            escape_html(&self.canonical_path(base_path)),
            escape_html(&self.title),
            escape_html(&excerpt)
        )
    }

    pub fn into_dto(self, base_path: &str) -> CampgroundDto {
        let popup_markup = self.popup_markup(base_path);

        CampgroundDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            price: self.price,
            description: self.description,
            location: self.location,
            geometry: self.geometry.into_dto(),
            images: self.images.into_iter().map(CampgroundImage::into_dto).collect(),
            author_id: self.author_id,
            popup_markup,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A campground with everything the detail view shows.
#[derive(Debug, Clone)]
pub struct CampgroundDetail {
    pub campground: Campground,
    pub author: Option<User>,
    pub reviews: ReviewPage,
}

/// How a detail lookup resolved.
#[derive(Debug, Clone)]
pub enum CampgroundLookup {
    /// Found by slug.
    Found(Box<CampgroundDetail>),
    /// Found by numeric id; clients should be sent to the slug URL.
    Moved(Campground),
    NotFound,
}

/// Fields shared by create and update after validation.
#[derive(Debug, Clone)]
pub struct CampgroundFields {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
}

/// Parameters for inserting a campground row and its images.
#[derive(Debug, Clone)]
pub struct CreateCampgroundParams {
    pub fields: CampgroundFields,
    /// Geocoded position of `fields.location`.
    pub geometry: GeoPoint,
    pub author_id: i32,
    pub images: Vec<NewImage>,
}

/// Parameters for replacing a campground's fields.
#[derive(Debug, Clone)]
pub struct UpdateCampgroundParams {
    pub id: i32,
    pub fields: CampgroundFields,
    /// New position when the location changed, `None` to keep the stored one.
    pub geometry: Option<GeoPoint>,
    /// Appended after existing images.
    pub new_images: Vec<NewImage>,
    /// Filenames to detach. Remote assets are destroyed by the caller.
    pub delete_images: Vec<String>,
}

/// Row-level filters shared by the searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampgroundFilter {
    /// Case-insensitive terms matched against title, description and location.
    /// A row matches when any term matches.
    pub terms: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Index listing query after parsing and clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexQuery {
    pub page: u64,
    pub limit: u64,
    pub filter: CampgroundFilter,
    pub geo: Option<GeoFilter>,
}

impl IndexQuery {
    /// Cache key covering every input that affects the result.
    pub fn cache_key(&self) -> String {
        let geo = self
            .geo
            .map(|g| {
                format!(
                    "{}:{}:{}",
                    g.center.latitude, g.center.longitude, g.radius_km
                )
            })
            .unwrap_or_default();

        format!(
            "cg:index:{}:{}:{}:{:?}:{:?}:{}",
            self.page,
            self.limit,
            self.filter.terms.join(" "),
            self.filter.min_price,
            self.filter.max_price,
            geo
        )
    }
}

/// One page of the index listing, newest first.
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub campgrounds: Vec<Campground>,
    pub total: u64,
    pub total_pages: u64,
}

/// Ordering for nearby results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NearbySort {
    #[default]
    Distance,
    PriceAsc,
    PriceDesc,
}

impl NearbySort {
    /// Parses the `sort` query value. Unknown values fall back to distance.
    pub fn parse(value: &str) -> Self {
        match value {
            "priceAsc" => Self::PriceAsc,
            "priceDesc" => Self::PriceDesc,
            _ => Self::Distance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub geo: GeoFilter,
    pub filter: CampgroundFilter,
    pub sort: NearbySort,
    pub page: u64,
}

/// A nearby result with its distance from the search center.
#[derive(Debug, Clone)]
pub struct NearbyCampground {
    pub campground: Campground,
    pub distance_m: f64,
}

impl NearbyCampground {
    pub fn into_dto(self, base_path: &str) -> NearbyCampgroundDto {
        NearbyCampgroundDto {
            campground: self.campground.into_dto(base_path),
            distance: self.distance_m,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NearbyPage {
    pub campgrounds: Vec<NearbyCampground>,
    pub total: u64,
    pub total_pages: u64,
}

/// Result of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    Added,
    Removed,
}

impl FavoriteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

/// Entry in the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}
