use crate::error::HexFogError;
use geo_types::Point;
use h3o::LatLng;
use serde::{Deserialize, Serialize};

/// Minimum and maximum latitude in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Minimum and maximum longitude in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A WGS84 position in degrees, latitude first.
///
/// Construct through [`GeoPoint::new`] to get range validation. The fields are
/// public so the type can be built from already-trusted data, but every
/// indexing entry point re-validates before use.
///
/// # Example
///
/// ```
/// use hexfog::GeoPoint;
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let point = GeoPoint::new(38.9907, -77.0261)?;
/// assert_eq!(point.latitude, 38.9907);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, failing with [`HexFogError::InvalidCoordinate`] when either
    /// value is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, HexFogError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Checks the range invariants of this point.
    pub fn validate(&self) -> Result<(), HexFogError> {
        let lat_ok = self.latitude.is_finite()
            && self.latitude >= LATITUDE_RANGE.0
            && self.latitude <= LATITUDE_RANGE.1;
        let lng_ok = self.longitude.is_finite()
            && self.longitude >= LONGITUDE_RANGE.0
            && self.longitude <= LONGITUDE_RANGE.1;

        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(HexFogError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance to another position, in meters.
    pub fn distance_m(&self, other: &impl Coordinate) -> Result<f64, HexFogError> {
        let a = self.to_lat_lng()?;
        let b = GeoPoint::from_coordinate(other)?.to_lat_lng()?;
        Ok(a.distance_m(b))
    }

    /// Validates any [`Coordinate`] into a `GeoPoint`.
    pub fn from_coordinate(coord: &impl Coordinate) -> Result<Self, HexFogError> {
        Self::new(coord.lat(), coord.lng())
    }

    pub(crate) fn to_lat_lng(self) -> Result<LatLng, HexFogError> {
        self.validate()?;
        LatLng::new(self.latitude, self.longitude).map_err(|_| HexFogError::InvalidCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl From<LatLng> for GeoPoint {
    fn from(ll: LatLng) -> Self {
        Self {
            latitude: ll.lat(),
            longitude: ll.lng(),
        }
    }
}

/// Trait for types that can provide a latitude/longitude pair in degrees.
///
/// Implemented for [`GeoPoint`], `h3o::LatLng` and `geo_types::Point<f64>`.
/// A `Point` follows the GeoJSON convention, so `x` is longitude and `y` is
/// latitude. Bare tuples are deliberately not supported since their axis order
/// is ambiguous.
pub trait Coordinate {
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees.
    fn lng(&self) -> f64;
}

impl Coordinate for GeoPoint {
    fn lat(&self) -> f64 {
        self.latitude
    }
    fn lng(&self) -> f64 {
        self.longitude
    }
}

impl Coordinate for LatLng {
    fn lat(&self) -> f64 {
        LatLng::lat(*self)
    }
    fn lng(&self) -> f64 {
        LatLng::lng(*self)
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}
