//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection
//! and HTTP client are pools behind an `Arc`, and the cache shares its storage
//! between clones.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{CloudinaryConfig, Config, MapboxConfig},
    service::cache::Cache,
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for the geocoding and media host APIs.
    ///
    /// Configured not to follow redirects.
    pub http_client: reqwest::Client,

    /// In-process cache for index pages, geocoding results and the sitemap.
    pub cache: Cache,

    /// Normalized base path the API is mounted under, empty for the root.
    pub base_path: String,

    /// Public origin used to build absolute URLs.
    pub app_url: String,

    pub mapbox: MapboxConfig,

    /// `None` when image uploads are not configured.
    pub cloudinary: Option<CloudinaryConfig>,
}

impl AppState {
    /// Creates the application state from startup dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Loaded configuration
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            cache: Cache::new(config.cache_enabled),
            base_path: config.base_path.clone(),
            app_url: config.app_url.clone(),
            mapbox: config.mapbox.clone(),
            cloudinary: config.cloudinary.clone(),
        }
    }

    /// Path under the base path, e.g. `/outdoorsy/campgrounds`.
    pub fn path(&self, path: &str) -> String {
        crate::server::util::url::join_path(&self.base_path, path)
    }
}
