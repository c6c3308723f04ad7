use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{review::ReviewDto, user::UserDto};

/// GeoJSON Point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeometryDto {
    /// Always `"Point"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub url: String,
    /// Media host public id. Pass it in `deleteImages[]` to remove the image.
    pub filename: String,
    pub alt: Option<String>,
    /// 200px wide rendition of `url`.
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampgroundDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub geometry: GeometryDto,
    pub images: Vec<ImageDto>,
    pub author_id: i32,
    /// HTML snippet for a map marker popup. Title and description are escaped.
    pub popup_markup: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart body accepted by create and update.
///
/// Documentation only; the handlers read the fields by name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampgroundFormDto {
    #[serde(rename = "campground[title]")]
    pub title: String,
    #[serde(rename = "campground[price]")]
    pub price: String,
    #[serde(rename = "campground[location]")]
    pub location: String,
    #[serde(rename = "campground[description]")]
    pub description: String,
    /// Zero or more image files.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub image: Vec<Vec<u8>>,
    /// Update only: filenames of images to remove.
    #[serde(rename = "deleteImages[]")]
    pub delete_images: Vec<String>,
}

/// Filters echoed back by the index endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IndexFiltersDto {
    pub q: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampgroundIndexDto {
    pub campgrounds: Vec<CampgroundDto>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub filters: IndexFiltersDto,
    /// Campground ids favorited by the signed in user. Empty when signed out.
    pub favorites: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NearbyCampgroundDto {
    #[serde(flatten)]
    pub campground: CampgroundDto,
    /// Great-circle distance from the search point in meters.
    pub distance: f64,
}

/// Filters echoed back by the nearby endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyFiltersDto {
    pub q: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
    pub sort: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NearbyDto {
    pub campgrounds: Vec<NearbyCampgroundDto>,
    pub page: u64,
    pub total: u64,
    pub total_pages: u64,
    /// Set when the search could not run because coordinates or radius were missing.
    pub notice: Option<String>,
    pub filters: NearbyFiltersDto,
    pub favorites: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampgroundDetailDto {
    pub campground: CampgroundDto,
    pub author: Option<UserDto>,
    pub reviews: Vec<ReviewDto>,
    pub reviews_page: u64,
    pub reviews_limit: u64,
    pub reviews_total_pages: u64,
    /// Path of the canonical slug URL.
    pub canonical: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub campgrounds: Vec<CampgroundDto>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStatusDto {
    /// `added` or `removed`.
    pub status: String,
}
