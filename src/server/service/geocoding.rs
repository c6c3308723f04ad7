//! Forward geocoding through the Mapbox Places API.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::server::{
    config::MapboxConfig,
    error::{external::ExternalError, AppError},
    model::geo::GeoPoint,
    service::cache::Cache,
};

/// Geocoding results rarely change, so lookups are cached for a day.
const GEOCODE_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const GEOCODE_CACHE_PREFIX: &str = "geo:";

/// The part of a Places API response used for forward geocoding.
#[derive(Debug, Deserialize)]
pub struct ForwardResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<PointGeometry>,
}

/// GeoJSON point, `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
struct PointGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

pub struct GeocodingService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a MapboxConfig,
    cache: &'a Cache,
}

impl<'a> GeocodingService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a MapboxConfig, cache: &'a Cache) -> Self {
        Self {
            http_client,
            config,
            cache,
        }
    }

    /// Fails early when no access token is configured.
    pub fn ensure_configured(&self) -> Result<(), AppError> {
        if self.config.token.is_none() {
            return Err(ExternalError::MissingMapboxToken.into());
        }
        Ok(())
    }

    /// Resolves a free-text location to the best matching point.
    ///
    /// Empty results are cached as well, so repeated submissions of an unknown
    /// place do not hit the API again.
    ///
    /// # Returns
    /// - `Ok(GeoPoint)` - Coordinates of the first feature
    /// - `Err(ExternalError::MissingMapboxToken)` - No token configured
    /// - `Err(ExternalError::InvalidLocation)` - No usable feature for `location`
    /// - `Err(ExternalError::Geocoding)` - Unexpected API response
    pub async fn forward(&self, location: &str) -> Result<GeoPoint, AppError> {
        let Some(token) = self.config.token.as_deref() else {
            return Err(ExternalError::MissingMapboxToken.into());
        };

        let location = location.trim();
        let key = format!("{}{}", GEOCODE_CACHE_PREFIX, location);

        let point = self
            .cache
            .get_or_set(&key, GEOCODE_CACHE_TTL, || self.fetch(location, token))
            .await?;

        point.ok_or_else(|| ExternalError::InvalidLocation.into())
    }

    async fn fetch(&self, location: &str, token: &str) -> Result<Option<GeoPoint>, AppError> {
        let url = forward_url(&self.config.api_url, location, token)?;

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExternalError::Geocoding(format!(
                "unexpected status {} for location lookup",
                status
            ))
            .into());
        }

        let body: ForwardResponse = response.json().await?;
        let point = parse_forward_response(&body);
        if point.is_none() {
            tracing::debug!("No geocoding match for {:?}", location);
        }

        Ok(point)
    }
}

/// Builds `{api_url}/geocoding/v5/mapbox.places/{location}.json?access_token=..&limit=1`
/// with `location` percent-encoded as a single path segment.
fn forward_url(api_url: &str, location: &str, token: &str) -> Result<Url, ExternalError> {
    let mut url =
        Url::parse(api_url).map_err(|e| ExternalError::Geocoding(format!("invalid API URL: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| ExternalError::Geocoding("API URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(["geocoding", "v5", "mapbox.places"])
        .push(&format!("{}.json", location));

    url.query_pairs_mut()
        .append_pair("access_token", token)
        .append_pair("limit", "1");

    Ok(url)
}

/// Extracts the first feature's point geometry from a Places API response.
///
/// Returns `None` when there are no features or the coordinates are missing or
/// out of range.
pub fn parse_forward_response(body: &ForwardResponse) -> Option<GeoPoint> {
    let geometry = body.features.first()?.geometry.as_ref()?;

    let point = GeoPoint::new(*geometry.coordinates.first()?, *geometry.coordinates.get(1)?);

    point.is_valid().then_some(point)
}
