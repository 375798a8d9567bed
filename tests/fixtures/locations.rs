//! Real Las Vegas locations and known encodings.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

#![allow(dead_code)]

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Reference Vectors
// ============================================================================

/// Example route from Google's polyline algorithm documentation.
pub const GOOGLE_ROUTE: &[(f64, f64)] = &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
pub const GOOGLE_ROUTE_ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// South pole at the antimeridian, the origin, then the north pole.
pub const POLES: &[(f64, f64)] = &[(-90.0, -180.0), (0.0, 0.0), (90.0, 180.0)];
pub const POLES_ENCODED: &str = "~bidP~fsia@_cidP_gsia@_cidP_gsia@";

// ============================================================================
// Strip Drive (north to south)
// ============================================================================

pub const STRIP_DRIVE: &[Location] = &[
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Ruth's Chris Steak House", 36.1193113, -115.1722630),
    Location::new("Guy Fieri's Vegas Kitchen", 36.1184064, -115.1722088),
    Location::new("Hash House A Go Go", 36.1181377, -115.1710989),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Le Cirque", 36.1135689, -115.1749763),
    Location::new("BLT Steakhouse", 36.1135528, -115.1690095),
    Location::new("Gordon Ramsay Steak", 36.1127744, -115.1712029),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Tahiti Joe's Restaurant", 36.0592855, -115.1716402),
    Location::new("Denny's South", 36.0591086, -115.1717250),
    Location::new("Dickey's Barbecue Pit", 36.0544257, -115.1715391),
    Location::new("Buffalo Wild Wings South", 36.0543044, -115.1714860),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
];

/// Returns the strip drive as (lat, lng) tuples.
pub fn strip_drive_coords() -> Vec<(f64, f64)> {
    STRIP_DRIVE.iter().map(Location::coords).collect()
}

/// Synthetic track circling the globe, exercising large offsets and
/// sign changes on both axes.
pub fn world_tour(points: usize) -> Vec<(f64, f64)> {
    (0..points)
        .map(|i| {
            let t = i as f64 / points.max(1) as f64;
            let lat = 89.0 * (t * 13.0).sin();
            let lng = -180.0 + 360.0 * t;
            (lat, lng)
        })
        .collect()
}
