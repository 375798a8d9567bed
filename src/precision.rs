//! Fixed-point precision shared by the encoder and decoder.
//!
//! The precision is not carried in the encoded string, so both sides of a
//! round trip must agree on it out of band. Five digits is the value used
//! by Google's published algorithm.

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};

/// Largest magnitude a scaled value may have so that the sign shift still
/// fits a signed 32-bit integer.
pub(crate) const MAX_FIXED: i64 = (i32::MAX >> 1) as i64;

/// Number of decimal digits kept when coordinates are converted to fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// Highest supported precision. A full 360° longitude delta at 10^6 is
    /// 3.6e8, which still fits 31 bits; at 10^7 it would not.
    pub const MAX: Precision = Precision(6);

    /// Google's standard precision of five digits.
    pub const DEFAULT: Precision = Precision(5);

    pub fn new(digits: u8) -> Result<Self> {
        if digits > Self::MAX.0 {
            return Err(PolylineError::InvalidPrecision(digits));
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u8 {
        self.0
    }

    /// The scale factor `10^digits`.
    pub fn factor(self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    /// Rounds `value` to the nearest representable value at this precision.
    pub fn round(self, value: f64) -> f64 {
        let factor = self.factor();
        (value * factor).round() / factor
    }

    /// Scales `value` to a fixed-point integer, rounding half away from zero.
    pub fn to_fixed(self, value: f64) -> Result<i32> {
        let scaled = (value * self.factor()).round();
        if !scaled.is_finite() || scaled.abs() > MAX_FIXED as f64 {
            return Err(PolylineError::ScaleOverflow {
                value,
                precision: self.0,
            });
        }
        Ok(scaled as i32)
    }

    /// Converts a fixed-point integer back to degrees.
    pub fn from_fixed(self, fixed: i64) -> f64 {
        fixed as f64 / self.factor()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Precision {
    type Error = PolylineError;

    fn try_from(digits: u8) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}
