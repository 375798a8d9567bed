//! Validated latitude/longitude pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};
use crate::precision::Precision;

/// An immutable coordinate pair rounded to a fixed decimal precision.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = PolylineError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

fn check_range(latitude: f64, longitude: f64) -> Result<()> {
    // NaN fails both range checks.
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(PolylineError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(PolylineError::InvalidLongitude(longitude));
    }
    Ok(())
}

impl Point {
    /// Creates a point rounded to the default five-digit precision.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_precision(latitude, longitude, Precision::DEFAULT)
    }

    /// Creates a point rounded to `precision` digits.
    pub fn with_precision(latitude: f64, longitude: f64, precision: Precision) -> Result<Self> {
        check_range(latitude, longitude)?;
        Ok(Self {
            latitude: precision.round(latitude),
            longitude: precision.round(longitude),
        })
    }

    /// Builds a point from fixed-point integers produced by the decoder.
    pub(crate) fn from_fixed(latitude: i64, longitude: i64, precision: Precision) -> Self {
        Self {
            latitude: precision.from_fixed(latitude),
            longitude: precision.from_fixed(longitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the point as a `(latitude, longitude)` tuple.
    pub fn to_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = PolylineError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
        Self::new(latitude, longitude)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        point.to_tuple()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_default_precision() {
        let point = Point::new(38.123456789, -120.987654321).unwrap();
        assert_eq!(point.latitude(), 38.12346);
        assert_eq!(point.longitude(), -120.98765);
    }

    #[test]
    fn test_values_below_threshold_are_equal() {
        let a = Point::new(0.000_000_5, 0.000_000_5).unwrap();
        let b = Point::new(0.0, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_precision() {
        let p6 = Precision::new(6).unwrap();
        let point = Point::with_precision(1.2345678, 2.3456789, p6).unwrap();
        assert_eq!(point.to_tuple(), (1.234568, 2.345679));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Point::new(90.0, 180.0).is_ok());
        assert!(Point::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Point::new(90.1, 0.0), Err(PolylineError::InvalidLatitude(90.1)));
        assert_eq!(
            Point::new(0.0, -180.5),
            Err(PolylineError::InvalidLongitude(-180.5))
        );
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_tuple_conversions() {
        let point = Point::try_from((36.1147, -115.1728)).unwrap();
        let (lat, lng): (f64, f64) = point.into();
        assert_eq!((lat, lng), (36.1147, -115.1728));
        assert!(Point::try_from((100.0, 0.0)).is_err());
    }

    #[test]
    fn test_display() {
        let point = Point::new(1.5, -2.25).unwrap();
        assert_eq!(point.to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn test_serde_round_trip() {
        let point = Point::new(38.5, -120.2).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"latitude":38.5,"longitude":-120.2}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let result = serde_json::from_str::<Point>(r#"{"latitude":95.0,"longitude":0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_rounds_to_default_precision() {
        let point: Point =
            serde_json::from_str(r#"{"latitude":38.123456789,"longitude":-120.0}"#).unwrap();
        assert_eq!(point, Point::new(38.123456789, -120.0).unwrap());
        assert_eq!(point.latitude(), 38.12346);

        let polyline = crate::polyline::Polyline::new(vec![point]);
        assert_eq!(crate::polyline::decode(&polyline.encode()), polyline);
    }
}
