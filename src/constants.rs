//! # Constants and type definitions for edpoints
//!
//! This module centralizes the **geodetic constants**, **lattice constants**, and **unit type
//! aliases** used throughout the `edpoints` library.
//!
//! ## Overview
//!
//! - Reference ellipsoid radii (WGS-84 defaults)
//! - The minimal point count and the golden angle of the Fibonacci lattice
//! - The mean Earth radius used for great-circle (haversine) distances
//! - Type aliases documenting the unit carried by a bare `f64`

// -------------------------------------------------------------------------------------------------
// Geodetic constants
// -------------------------------------------------------------------------------------------------

/// Earth equatorial radius in meters (WGS-84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth polar radius in meters (WGS-84, rounded to the decimeter)
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.3;

/// Mean Earth radius in kilometers used for haversine great-circle distances
pub const HAVERSINE_EARTH_RADIUS_KM: f64 = 6372.795;

// -------------------------------------------------------------------------------------------------
// Lattice constants
// -------------------------------------------------------------------------------------------------

/// Smallest number of points for which a spherical distribution is defined
pub const MIN_POINTS: usize = 3;

/// Golden angle `π(3 − √5)` in radians, azimuth step of the lattice spiral
pub const GOLDEN_ANGLE: Radian = 2.399963229728653;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in kilometers
pub type Kilometer = f64;
