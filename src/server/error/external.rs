use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures talking to the geocoding API or the media host.
#[derive(Error, Debug)]
pub enum ExternalError {
    /// Neither `MAPBOX_TOKEN` nor `MAPBOX_MAPBOX_TOKEN` is configured.
    ///
    /// Results in 500 with the message shown to the client, since the operator
    /// has to fix the deployment.
    #[error("Missing MAPBOX_TOKEN.")]
    MissingMapboxToken,

    /// The geocoder returned no features for the location string. 400.
    #[error("Invalid location provided")]
    InvalidLocation,

    /// The geocoder answered with an unexpected status or body.
    #[error("Geocoding request failed: {0}")]
    Geocoding(String),

    /// Images were submitted but no media host credentials are configured.
    #[error("Image uploads are not configured")]
    MediaNotConfigured,

    /// The media host rejected an upload or destroy call.
    #[error("Media host request failed: {0}")]
    Media(String),
}

impl IntoResponse for ExternalError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingMapboxToken => {
                tracing::error!("{}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            Self::InvalidLocation => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            err => {
                tracing::error!("{}", err);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
