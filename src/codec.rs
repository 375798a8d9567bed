//! Stateful encoder that accumulates points one at a time.

use crate::error::Result;
use crate::point::Point;
use crate::polyline::{self, Polyline};
use crate::precision::Precision;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Digits kept after the decimal point for both rounding and encoding.
    pub precision: Precision,
}

/// Accumulates points and encodes them as a polyline string.
///
/// The accumulated sequence is owned by the codec; concurrent mutation of
/// one instance must be serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct PolylineCodec {
    config: CodecConfig,
    polyline: Polyline,
}

impl PolylineCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config,
            polyline: Polyline::default(),
        }
    }

    pub fn with_precision(precision: Precision) -> Self {
        Self::with_config(CodecConfig { precision })
    }

    pub fn precision(&self) -> Precision {
        self.config.precision
    }

    /// Appends a point rounded to the codec's precision.
    ///
    /// Rejects latitudes outside [-90, 90] and longitudes outside
    /// [-180, 180]; the codec is left unchanged on error.
    pub fn add_point(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        let point = Point::with_precision(latitude, longitude, self.config.precision)?;
        self.polyline.push(point);
        Ok(())
    }

    /// Appends several `(latitude, longitude)` pairs. Either all of them are
    /// added or, if any is invalid, none are.
    pub fn extend<I>(&mut self, coordinates: I) -> Result<()>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let precision = self.config.precision;
        let points = coordinates
            .into_iter()
            .map(|(lat, lng)| Point::with_precision(lat, lng, precision))
            .collect::<Result<Vec<_>>>()?;
        self.polyline.extend(points);
        Ok(())
    }

    /// Encodes the accumulated points. Does not modify them.
    pub fn encode(&self) -> String {
        self.polyline.encode_with(self.config.precision)
    }

    /// Decodes `encoded` at this codec's precision. Returns an empty polyline
    /// on malformed input.
    pub fn decode(&self, encoded: &str) -> Polyline {
        polyline::decode_with(encoded, self.config.precision)
    }

    /// Read-only view of the accumulated points.
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn into_polyline(self) -> Polyline {
        self.polyline
    }

    pub fn len(&self) -> usize {
        self.polyline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polyline.is_empty()
    }

    pub fn clear(&mut self) {
        self.polyline.clear();
    }
}
