//! polyline-codec
//!
//! Encodes latitude/longitude sequences with Google's polyline algorithm
//! and decodes them back, with a configurable fixed-point precision.

pub mod batch;
pub mod codec;
pub mod error;
pub mod point;
pub mod polyline;
pub mod precision;
pub mod traits;
pub mod value;

pub use codec::{CodecConfig, PolylineCodec};
pub use error::{PolylineError, Result};
pub use point::Point;
pub use polyline::{Polyline, decode, decode_with, encode, encode_coordinates, encode_with, try_decode};
pub use precision::Precision;
pub use traits::LatLng;
