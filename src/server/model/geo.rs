use crate::model::campground::GeometryDto;

/// A GeoJSON Point position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Degrees east, valid range [-180, 180].
    pub longitude: f64,
    /// Degrees north, valid range [-90, 90].
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Whether both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    pub fn into_dto(self) -> GeometryDto {
        GeometryDto {
            kind: "Point".to_string(),
            coordinates: [self.longitude, self.latitude],
        }
    }
}

/// Axis-aligned rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }
}

/// Center and radius of a geographic search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub center: GeoPoint,
    pub radius_km: f64,
}
