//! Spherical mercator constants shared by the projector and its types.

use std::f64::consts::PI;

/// Radius of the spherical earth used by web mercator, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half width (and half height) of the projected plane in meters: `PI * EARTH_RADIUS`.
///
/// Projected coordinates are clamped to `±MAX_EXTENT`.
pub const MAX_EXTENT: f64 = 20_037_508.342_789_244;

/// Degrees to radians.
pub const D2R: f64 = PI / 180.0;

/// Radians to degrees.
pub const R2D: f64 = 180.0 / PI;

/// Largest value `sin(lat)` may take before the mercator y formula is evaluated.
///
/// Keeps `ln((1 + f) / (1 - f))` finite near the poles.
pub const MAX_SIN_LAT: f64 = 0.9999;

/// Number of zoom levels precomputed for every tile size (`0..=29`).
pub const ZOOM_LEVELS: usize = 30;

/// Tile size in pixels used when none is configured.
pub const DEFAULT_TILE_SIZE: u32 = 256;
