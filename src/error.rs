//! Error types for encoding and decoding polylines.

/// Convenience alias used throughout the crate.
pub type Result<T, E = PolylineError> = std::result::Result<T, E>;

/// Everything that can go wrong while building, encoding or decoding a polyline.
///
/// Variants fall into two classes: invalid coordinates supplied by the
/// caller (see [`PolylineError::is_invalid_coordinate`]) and malformed
/// encoded strings (see [`PolylineError::is_malformed`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolylineError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("precision {0} is above the supported maximum of 6 digits")]
    InvalidPrecision(u8),

    #[error("value {value} does not fit 31 bits at precision {precision}")]
    ScaleOverflow { value: f64, precision: u8 },

    #[error("encoded value starting at byte {position} is incomplete")]
    IncompleteValue { position: usize },

    #[error("byte {byte:#04x} at position {position} is outside the polyline alphabet")]
    InvalidCharacter { byte: u8, position: usize },

    #[error("encoded value starting at byte {position} is longer than 32 bits")]
    ValueTooLong { position: usize },

    #[error("latitude at byte {position} has no matching longitude")]
    MissingLongitude { position: usize },

    #[error("decoded latitude {value} at byte {position} is outside [-90, 90]")]
    LatitudeOutOfRange { value: f64, position: usize },

    #[error("decoded longitude {value} at byte {position} is outside [-180, 180]")]
    LongitudeOutOfRange { value: f64, position: usize },
}

impl PolylineError {
    /// True for errors raised while decoding a string.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            PolylineError::IncompleteValue { .. }
                | PolylineError::InvalidCharacter { .. }
                | PolylineError::ValueTooLong { .. }
                | PolylineError::MissingLongitude { .. }
                | PolylineError::LatitudeOutOfRange { .. }
                | PolylineError::LongitudeOutOfRange { .. }
        )
    }

    /// True for coordinates rejected at construction time.
    pub fn is_invalid_coordinate(&self) -> bool {
        matches!(
            self,
            PolylineError::InvalidLatitude(_) | PolylineError::InvalidLongitude(_)
        )
    }
}
