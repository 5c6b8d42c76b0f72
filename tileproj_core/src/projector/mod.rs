//! The [`Projector`]: conversions between WGS84 degrees, spherical mercator meters
//! and the pixel/tile space of a tile pyramid.
//!
//! Pixel `(0, 0)` of a zoom level is the north-west corner of the projected world;
//! pixel y grows southwards, so tile row 0 is the northernmost row (XYZ). Methods
//! that take a `tms_style` flag convert from/to the TMS convention where row 0 is
//! the southernmost row.
//!
//! Two clamping rules handle the singularities at the poles and are relied upon by
//! tile math downstream:
//!
//! - pixel conversion clamps `sin(lat)` to `±0.9999` and the resulting pixel
//!   values to an *upper* bound of the level extent only,
//! - projection to meters clamps both axes to `±MAX_EXTENT`.
//!
//! Degenerate numbers (NaN, infinities) are not rejected; they flow through the
//! formulas. Only a zoom level outside the precomputed table is an error.

mod cache;
mod options;

pub use cache::*;
pub use options::*;

use crate::{BBox, D2R, EARTH_RADIUS, MAX_EXTENT, MAX_SIN_LAT, R2D, Srs, TileBounds, TileCoord};
use anyhow::{Context, Result, ensure};
use std::{
	f64::consts::{FRAC_PI_2, FRAC_PI_4},
	fmt::{self, Debug},
	sync::Arc,
};

#[derive(Clone)]
pub struct Projector {
	size: u32,
	constants: Arc<ZoomConstants>,
}

impl Projector {
	/// Creates a projector for tiles of `size` × `size` pixels.
	///
	/// # Errors
	/// Returns an error if `size` is 0.
	pub fn new(size: u32) -> Result<Projector> {
		ensure!(size > 0, "tile size must be a positive integer, got {size}");
		Ok(Projector {
			size,
			constants: constants_for(size),
		})
	}

	pub fn from_options(options: &ProjectorOptions) -> Result<Projector> {
		Projector::new(options.size).context("Failed to create projector from options")
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	pub fn constants(&self) -> &Arc<ZoomConstants> {
		&self.constants
	}

	/// Converts `[lon, lat]` in degrees to integral pixel coordinates at `zoom`.
	///
	/// Pixel values are capped at the level extent but not floored at 0, so
	/// longitudes below -180 give negative x.
	pub fn pixel_from_lon_lat(&self, lon_lat: [f64; 2], zoom: u8) -> Result<[f64; 2]> {
		let level = self.constants.level(zoom)?;
		let f = (lon_lat[1] * D2R).sin().clamp(-MAX_SIN_LAT, MAX_SIN_LAT);
		let x = round_half_up(level.zc + lon_lat[0] * level.bc);
		let y = round_half_up(level.zc + 0.5 * ((1.0 + f) / (1.0 - f)).ln() * -level.cc);
		Ok([cap(x, level.ac), cap(y, level.ac)])
	}

	/// Converts pixel coordinates at `zoom` to `[lon, lat]` in degrees.
	pub fn lon_lat_from_pixel(&self, px: [f64; 2], zoom: u8) -> Result<[f64; 2]> {
		let level = self.constants.level(zoom)?;
		let g = (px[1] - level.zc) / -level.cc;
		let lon = (px[0] - level.zc) / level.bc;
		let lat = R2D * (2.0 * g.exp().atan() - FRAC_PI_2);
		Ok([lon, lat])
	}

	/// Returns the bounding box `[west, south, east, north]` of tile `x`, `y` at `zoom`.
	///
	/// With `tms_style` the row index counts from the south. Tile indices are not
	/// range checked. The box is given in `srs`.
	pub fn bbox_from_tile(&self, x: i64, y: i64, zoom: u8, tms_style: bool, srs: Srs) -> Result<BBox> {
		self.constants.level(zoom)?;
		let y = if tms_style { flip_row(y, zoom) } else { y };
		let size = f64::from(self.size);
		let (x, y) = (x as f64, y as f64);

		// pixel y grows southwards: the lower-left corner sits on the row below
		let lower_left = [x * size, (y + 1.0) * size];
		let upper_right = [(x + 1.0) * size, y * size];

		let bbox = BBox::from_corners(
			self.lon_lat_from_pixel(lower_left, zoom)?,
			self.lon_lat_from_pixel(upper_right, zoom)?,
		);
		Ok(match srs {
			Srs::Wgs84 => bbox,
			Srs::Mercator900913 => self.reproject(&bbox, Srs::Mercator900913),
		})
	}

	/// Bounding box of a validated tile coordinate; see [`Projector::bbox_from_tile`].
	pub fn tile_bbox(&self, coord: &TileCoord, tms_style: bool, srs: Srs) -> Result<BBox> {
		self.bbox_from_tile(
			i64::from(coord.x),
			i64::from(coord.y),
			coord.level,
			tms_style,
			srs,
		)
		.with_context(|| format!("Failed to compute bbox of tile {coord}"))
	}

	/// Returns the range of tiles at `zoom` covering `bbox`, which is given in `srs`.
	///
	/// A pixel lying exactly on a tile border is assigned to the tile below/right of it.
	/// With `tms_style` the returned rows count from the south.
	pub fn tile_bounds_from_bbox(&self, bbox: &BBox, zoom: u8, tms_style: bool, srs: Srs) -> Result<TileBounds> {
		let bbox = match srs {
			Srs::Wgs84 => *bbox,
			Srs::Mercator900913 => self.reproject(bbox, Srs::Wgs84),
		};
		let lower_left = self.pixel_from_lon_lat(bbox.lower_left(), zoom)?;
		let upper_right = self.pixel_from_lon_lat(bbox.upper_right(), zoom)?;
		let size = f64::from(self.size);

		let bounds = TileBounds::new(
			(lower_left[0] / size).floor() as i64,
			(upper_right[1] / size).floor() as i64,
			((upper_right[0] - 1.0) / size).floor() as i64,
			((lower_left[1] - 1.0) / size).floor() as i64,
		);
		if !tms_style {
			return Ok(bounds);
		}
		// flipping reverses the order, so the rows swap roles
		Ok(TileBounds::new(
			bounds.min_x,
			flip_row(bounds.max_y, zoom),
			bounds.max_x,
			flip_row(bounds.min_y, zoom),
		))
	}

	/// Reprojects both corners of `bbox` into `target`.
	///
	/// The source system is the other one: WGS84 for a 900913 target and vice versa.
	pub fn reproject(&self, bbox: &BBox, target: Srs) -> BBox {
		let convert: fn(&Projector, [f64; 2]) -> [f64; 2] = match target {
			Srs::Mercator900913 => Projector::to_projected,
			Srs::Wgs84 => Projector::to_geographic,
		};
		BBox::from_corners(
			convert(self, bbox.lower_left()),
			convert(self, bbox.upper_right()),
		)
	}

	/// Projects `[lon, lat]` in degrees to spherical mercator `[x, y]` in meters,
	/// clamped to `±MAX_EXTENT`.
	pub fn to_projected(&self, lon_lat: [f64; 2]) -> [f64; 2] {
		let x = EARTH_RADIUS * lon_lat[0] * D2R;
		let y = EARTH_RADIUS * (FRAC_PI_4 + 0.5 * lon_lat[1] * D2R).tan().ln();
		[
			x.clamp(-MAX_EXTENT, MAX_EXTENT),
			y.clamp(-MAX_EXTENT, MAX_EXTENT),
		]
	}

	/// Unprojects spherical mercator `[x, y]` in meters to `[lon, lat]` in degrees.
	pub fn to_geographic(&self, xy: [f64; 2]) -> [f64; 2] {
		[
			xy[0] * R2D / EARTH_RADIUS,
			(FRAC_PI_2 - 2.0 * (-xy[1] / EARTH_RADIUS).exp().atan()) * R2D,
		]
	}
}

impl Default for Projector {
	/// A projector for 256 pixel tiles.
	fn default() -> Self {
		Projector {
			size: crate::DEFAULT_TILE_SIZE,
			constants: constants_for(crate::DEFAULT_TILE_SIZE),
		}
	}
}

impl Debug for Projector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Projector(size: {})", self.size)
	}
}

/// Rounds halves towards positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
	(value + 0.5).floor()
}

/// Upper-bound clamp that keeps NaN.
fn cap(value: f64, max: f64) -> f64 {
	if value > max { max } else { value }
}

/// Converts a row index between TMS and XYZ at `zoom`: `(2^zoom - 1) - row`,
/// saturating for rows far outside the grid.
fn flip_row(row: i64, zoom: u8) -> i64 {
	((1i64 << zoom) - 1).saturating_sub(row)
}
