//! Environment-based application configuration.

use crate::server::{
    error::{config::ConfigError, AppError},
    util::url::normalize_base_path,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BASE_PATH: &str = "/outdoorsy";
const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_MAPBOX_API_URL: &str = "https://api.mapbox.com";
const DEFAULT_CLOUDINARY_API_URL: &str = "https://api.cloudinary.com";
const DEFAULT_CLOUDINARY_FOLDER: &str = "outdoorsy";

/// Forward geocoding settings.
#[derive(Clone, Debug)]
pub struct MapboxConfig {
    /// Access token. Campground create and update fail with 500 when absent.
    pub token: Option<String>,
    pub api_url: String,
}

/// Media host credentials. All three of cloud name, key and secret must be set.
#[derive(Clone, Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder uploaded images are placed in.
    pub folder: String,
    pub api_url: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Normalized mount prefix, either empty or `/segment` without trailing slash.
    pub base_path: String,
    /// Public origin used to build absolute URLs, without trailing slash.
    pub app_url: String,
    pub production: bool,

    pub mapbox: MapboxConfig,
    pub cloudinary: Option<CloudinaryConfig>,

    /// In-process response cache, disabled with `OUTDOORSY_CACHE=0`.
    pub cache_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let base_path = normalize_base_path(
            &std::env::var("BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        );

        let app_url = std::env::var("APP_URL")
            .unwrap_or_else(|_| DEFAULT_APP_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let mapbox = MapboxConfig {
            token: optional_var("MAPBOX_TOKEN").or_else(|| optional_var("MAPBOX_MAPBOX_TOKEN")),
            api_url: optional_var("MAPBOX_API_URL")
                .unwrap_or_else(|| DEFAULT_MAPBOX_API_URL.to_string()),
        };

        Ok(Self {
            database_url,
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            base_path,
            app_url,
            production: optional_var("APP_ENV").as_deref() == Some("production"),
            mapbox,
            cloudinary: cloudinary_from_env()?,
            cache_enabled: optional_var("OUTDOORSY_CACHE").as_deref() != Some("0"),
        })
    }
}

/// Reads a variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Media host settings are all-or-nothing: a partial set is a configuration error.
fn cloudinary_from_env() -> Result<Option<CloudinaryConfig>, ConfigError> {
    let cloud_name = optional_var("CLOUDINARY_CLOUD_NAME");
    let api_key = optional_var("CLOUDINARY_KEY");
    let api_secret = optional_var("CLOUDINARY_SECRET");

    match (cloud_name, api_key, api_secret) {
        (None, None, None) => Ok(None),
        (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Some(CloudinaryConfig {
            cloud_name,
            api_key,
            api_secret,
            folder: optional_var("CLOUDINARY_FOLDER")
                .unwrap_or_else(|| DEFAULT_CLOUDINARY_FOLDER.to_string()),
            api_url: optional_var("CLOUDINARY_API_URL")
                .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_URL.to_string()),
        })),
        (cloud_name, api_key, _) => {
            let missing = if cloud_name.is_none() {
                "CLOUDINARY_CLOUD_NAME"
            } else if api_key.is_none() {
                "CLOUDINARY_KEY"
            } else {
                "CLOUDINARY_SECRET"
            };
            Err(ConfigError::MissingEnvVar(missing.to_string()))
        }
    }
}
