//! Polyline representation and the delta-chained sequence codec.
//!
//! Each point is written as the offset from the previous one (the first
//! from the origin), latitude before longitude. Offsets are computed on
//! fixed-point integers so rounding error never accumulates along a route.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};
use crate::point::Point;
use crate::precision::Precision;
use crate::traits::LatLng;
use crate::value::{decode_fixed, encode_fixed};

/// An ordered sequence of points.
///
/// Insertion order is significant and duplicates are kept. An empty
/// polyline is valid and encodes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from already validated points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Encodes at the default five-digit precision.
    pub fn encode(&self) -> String {
        encode_with(&self.points, Precision::DEFAULT)
    }

    pub fn encode_with(&self, precision: Precision) -> String {
        encode_with(&self.points, precision)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Polyline {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Strict parse at the default precision: a malformed string is an error
/// rather than an empty polyline.
impl FromStr for Polyline {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self> {
        try_decode(s, Precision::DEFAULT)
    }
}

/// Scales a coordinate already known to be within [-180, 180].
fn fixed(value: f64, precision: Precision) -> i64 {
    (value * precision.factor()).round() as i64
}

/// Appends both offsets of one point and returns its fixed-point position.
fn push_point(out: &mut String, prev: (i64, i64), lat: f64, lng: f64, precision: Precision) -> (i64, i64) {
    let lat = fixed(lat, precision);
    let lng = fixed(lng, precision);
    // Offsets are at most 360° * 10^6, well inside 31 bits.
    encode_fixed((lat - prev.0) as i32, out);
    encode_fixed((lng - prev.1) as i32, out);
    (lat, lng)
}

/// Encodes points at the default five-digit precision.
pub fn encode(points: &[Point]) -> String {
    encode_with(points, Precision::DEFAULT)
}

/// Encodes points at the given precision.
pub fn encode_with(points: &[Point], precision: Precision) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev = (0, 0);
    for point in points {
        prev = push_point(&mut out, prev, point.latitude(), point.longitude(), precision);
    }

    tracing::trace!(points = points.len(), bytes = out.len(), "encoded polyline");
    out
}

/// Encodes arbitrary coordinate values, validating each one the same way
/// [`Point::new`] does. Fails on the first out-of-range coordinate.
pub fn encode_coordinates<I>(coordinates: I, precision: Precision) -> Result<String>
where
    I: IntoIterator,
    I::Item: LatLng,
{
    let mut out = String::new();
    let mut prev = (0, 0);
    for coordinate in coordinates {
        let point = Point::with_precision(coordinate.lat(), coordinate.lng(), precision)?;
        prev = push_point(&mut out, prev, point.latitude(), point.longitude(), precision);
    }
    Ok(out)
}

/// Decodes at the default precision, returning an empty polyline if the
/// input is malformed in any way.
pub fn decode(encoded: &str) -> Polyline {
    decode_with(encoded, Precision::DEFAULT)
}

/// Decodes at the given precision, returning an empty polyline if the input
/// is malformed in any way. A non-empty result is always fully valid.
pub fn decode_with(encoded: &str, precision: Precision) -> Polyline {
    match try_decode(encoded, precision) {
        Ok(polyline) => polyline,
        Err(err) => {
            tracing::debug!(error = %err, bytes = encoded.len(), "discarding malformed polyline");
            Polyline::default()
        }
    }
}

/// Decodes a polyline, reporting why the input was rejected.
///
/// Decoding is all or nothing: any truncated value, stray byte or
/// out-of-range coordinate fails the whole string.
pub fn try_decode(encoded: &str, precision: Precision) -> Result<Polyline> {
    let bytes = encoded.as_bytes();
    let mut cursor = 0;
    let (mut lat, mut lng) = (0i64, 0i64);
    let mut points = Vec::new();

    while cursor < bytes.len() {
        let lat_start = cursor;
        lat += i64::from(decode_fixed(bytes, &mut cursor)?);
        let latitude = precision.from_fixed(lat);
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PolylineError::LatitudeOutOfRange {
                value: latitude,
                position: lat_start,
            });
        }

        if cursor >= bytes.len() {
            return Err(PolylineError::MissingLongitude { position: lat_start });
        }

        let lng_start = cursor;
        lng += i64::from(decode_fixed(bytes, &mut cursor)?);
        let longitude = precision.from_fixed(lng);
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PolylineError::LongitudeOutOfRange {
                value: longitude,
                position: lng_start,
            });
        }

        points.push(Point::from_fixed(lat, lng, precision));
    }

    tracing::trace!(points = points.len(), bytes = bytes.len(), "decoded polyline");
    Ok(Polyline::new(points))
}
