//! Great-circle math on a spherical earth.

use crate::server::model::geo::{BoundingBox, GeoPoint};

/// Earth radius used for all distance calculations, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Upper bound on any search radius.
pub const MAX_RADIUS_KM: f64 = 500.0;

/// Haversine distance between two points in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Rectangle in degrees that contains every point within `radius_km` of `center`.
///
/// Used as a cheap SQL prefilter; callers still check the exact distance. Near the
/// poles, or when the box would cross the antimeridian, longitude is left unbounded.
pub fn bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let d_lat = (radius_km / EARTH_RADIUS_KM).to_degrees();
    let min_lat = (center.latitude - d_lat).max(-90.0);
    let max_lat = (center.latitude + d_lat).min(90.0);

    let cos_lat = center.latitude.to_radians().cos();
    let (min_lng, max_lng) = if min_lat <= -90.0 || max_lat >= 90.0 || cos_lat <= f64::EPSILON {
        (-180.0, 180.0)
    } else {
        let d_lng = (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees();
        let (min_lng, max_lng) = (center.longitude - d_lng, center.longitude + d_lng);
        if min_lng < -180.0 || max_lng > 180.0 {
            (-180.0, 180.0)
        } else {
            (min_lng, max_lng)
        }
    };

    BoundingBox {
        min_lat,
        max_lat,
        min_lng,
        max_lng,
    }
}
