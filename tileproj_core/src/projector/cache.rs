//! Per-tile-size scaling constants and the process-wide table that shares them.
//!
//! For a tile size `S` and zoom `z` the projector needs four scalars:
//!
//! - `bc = S·2^z / 360`, degrees to pixels,
//! - `cc = S·2^z / 2π`, mercator y to pixels,
//! - `zc = S·2^z / 2`, pixel offset of the projection origin,
//! - `ac = S·2^z`, full pixel extent of the level.
//!
//! They depend on nothing but `S`, so each size is computed once on first use and
//! every [`crate::Projector`] with that size holds the same [`Arc`].

use crate::ZOOM_LEVELS;
use anyhow::{Result, ensure};
use dashmap::DashMap;
use lazy_static::lazy_static;
use std::{
	f64::consts::PI,
	fmt::{self, Debug},
	sync::Arc,
};

lazy_static! {
	static ref CONSTANTS: DashMap<u32, Arc<ZoomConstants>> = DashMap::new();
}

/// The four scalars of a single zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelConstants {
	pub bc: f64,
	pub cc: f64,
	pub zc: f64,
	pub ac: f64,
}

/// Scaling constants of zoom levels `0..ZOOM_LEVELS` for one tile size.
#[derive(Clone, PartialEq)]
pub struct ZoomConstants {
	size: u32,
	bc: [f64; ZOOM_LEVELS],
	cc: [f64; ZOOM_LEVELS],
	zc: [f64; ZOOM_LEVELS],
	ac: [f64; ZOOM_LEVELS],
}

impl ZoomConstants {
	/// Computes the table for `size`, doubling the pixel extent on every level.
	pub fn compute(size: u32) -> ZoomConstants {
		let mut constants = ZoomConstants {
			size,
			bc: [0.0; ZOOM_LEVELS],
			cc: [0.0; ZOOM_LEVELS],
			zc: [0.0; ZOOM_LEVELS],
			ac: [0.0; ZOOM_LEVELS],
		};

		let mut extent = f64::from(size);
		for level in 0..ZOOM_LEVELS {
			constants.bc[level] = extent / 360.0;
			constants.cc[level] = extent / (2.0 * PI);
			constants.zc[level] = extent / 2.0;
			constants.ac[level] = extent;
			extent *= 2.0;
		}
		constants
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	/// Looks up the constants of `zoom`.
	///
	/// # Errors
	/// Returns an error if `zoom` lies outside the precomputed levels.
	pub fn level(&self, zoom: u8) -> Result<LevelConstants> {
		let index = usize::from(zoom);
		ensure!(
			index < ZOOM_LEVELS,
			"zoom level {zoom} is outside the precomputed range 0..={}",
			ZOOM_LEVELS - 1
		);
		Ok(LevelConstants {
			bc: self.bc[index],
			cc: self.cc[index],
			zc: self.zc[index],
			ac: self.ac[index],
		})
	}
}

impl Debug for ZoomConstants {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ZoomConstants(size: {}, levels: {})", self.size, ZOOM_LEVELS)
	}
}

/// Returns the shared constants for `size`, computing them if this size is new.
///
/// Concurrent callers asking for the same new size may race; the map entry lock
/// lets exactly one of them compute the table.
pub fn constants_for(size: u32) -> Arc<ZoomConstants> {
	if let Some(entry) = CONSTANTS.get(&size) {
		return Arc::clone(entry.value());
	}
	let entry = CONSTANTS.entry(size).or_insert_with(|| {
		log::debug!("computing zoom constants for tile size {size}");
		Arc::new(ZoomConstants::compute(size))
	});
	Arc::clone(entry.value())
}

/// Tile sizes whose constants are currently cached, in ascending order.
pub fn cached_sizes() -> Vec<u32> {
	let mut sizes: Vec<u32> = CONSTANTS.iter().map(|entry| *entry.key()).collect();
	sizes.sort_unstable();
	sizes
}
