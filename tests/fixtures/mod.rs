//! Test fixtures for polyline-codec.
//!
//! Provides:
//! - Published reference vectors (Google's polyline documentation)
//! - Real Las Vegas locations (from OpenStreetMap) for round-trip routes

pub mod locations;

pub use locations::*;
