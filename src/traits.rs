//! Coordinate access trait.
//!
//! Lets callers encode their own location types without converting them
//! to [`Point`] first.

use crate::point::Point;

/// Anything with a latitude and longitude in degrees.
pub trait LatLng {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

/// `(latitude, longitude)` order, as used throughout the crate.
impl LatLng for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lng(&self) -> f64 {
        self.1
    }
}

impl LatLng for Point {
    fn lat(&self) -> f64 {
        self.latitude()
    }

    fn lng(&self) -> f64 {
        self.longitude()
    }
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}
