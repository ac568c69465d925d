//! Geographic points and the bounding box used by radius searches.

/// Kilometres per degree of latitude, also used for longitude at the equator.
const KM_PER_DEGREE: f64 = 111.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Pairs stored columns, which are only meaningful when both are present.
    pub fn from_columns(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Rectangle in latitude and longitude approximating a circle around a point.
///
/// Longitude degrees shrink with the cosine of the latitude. Boxes crossing the
/// antimeridian or a pole are not handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn around(center: Coordinates, radius_km: f64) -> Self {
        let latitude_delta = radius_km / KM_PER_DEGREE;
        let longitude_delta = radius_km / (KM_PER_DEGREE * center.latitude.to_radians().cos());

        Self {
            min_latitude: center.latitude - latitude_delta,
            max_latitude: center.latitude + latitude_delta,
            min_longitude: center.longitude - longitude_delta,
            max_longitude: center.longitude + longitude_delta,
        }
    }
}
