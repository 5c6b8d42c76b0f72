//! Tile addresses in a power-of-two tile pyramid.
//!
//! A [`TileCoord`] is a validated `(level, x, y)` triple. Whether `y` counts from the
//! north edge (XYZ) or the south edge (TMS) is decided by the caller;
//! [`TileCoord::flip_y`] converts between the two.
//!
//! ```
//! use tileproj_core::TileCoord;
//!
//! let mut coord: TileCoord = "3/1/2".parse().unwrap();
//! coord.flip_y();
//! assert_eq!(coord, TileCoord::new(3, 1, 5).unwrap());
//! ```

use anyhow::{Context, Result, ensure};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Highest zoom level a `u32` tile index can address.
const MAX_LEVEL: u8 = 31;

#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or an index lies outside the `2^level` grid.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Get the maximum valid x or y index at this zoom level, `2^level - 1`.
	#[must_use]
	pub fn max_value(&self) -> u32 {
		((1u64 << self.level) - 1) as u32
	}

	/// Flip the y index vertically within the grid, converting between TMS and XYZ rows.
	pub fn flip_y(&mut self) {
		self.y = self.max_value() - self.y;
	}

	#[must_use]
	pub fn flipped_y(mut self) -> TileCoord {
		self.flip_y();
		self
	}
}

/// Formatted as `TileCoord(z, [x, y])`.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

/// Formatted as `z/x/y`, the path form used by tile servers.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

impl FromStr for TileCoord {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.trim().split('/').collect();
		ensure!(parts.len() == 3, "tile '{s}' must have the form z/x/y");
		let level = parts[0]
			.parse::<u8>()
			.with_context(|| format!("invalid zoom level in tile '{s}'"))?;
		let x = parts[1]
			.parse::<u32>()
			.with_context(|| format!("invalid x in tile '{s}'"))?;
		let y = parts[2]
			.parse::<u32>()
			.with_context(|| format!("invalid y in tile '{s}'"))?;
		TileCoord::new(level, x, y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_fields() {
		let coord = TileCoord::new(5, 3, 4).unwrap();
		assert_eq!(coord.level, 5);
		assert_eq!(coord.x, 3);
		assert_eq!(coord.y, 4);
	}

	#[rstest]
	#[case(32, 0, 0)]
	#[case(0, 1, 0)]
	#[case(0, 0, 1)]
	#[case(3, 8, 0)]
	fn new_out_of_bounds(#[case] level: u8, #[case] x: u32, #[case] y: u32) {
		assert!(TileCoord::new(level, x, y).is_err());
	}

	#[test]
	fn max_level_accepts_full_range() {
		let coord = TileCoord::new(31, u32::MAX >> 1, 0).unwrap();
		assert_eq!(coord.max_value(), u32::MAX >> 1);
	}

	#[rstest]
	#[case(0, 0, 0)]
	#[case(3, 2, 5)]
	#[case(12, 2200, 1895)]
	fn flip_y(#[case] level: u8, #[case] y: u32, #[case] flipped: u32) {
		let coord = TileCoord::new(level, 0, y).unwrap();
		assert_eq!(coord.flipped_y().y, flipped);
		assert_eq!(coord.flipped_y().flipped_y(), coord);
	}

	#[test]
	fn formats() {
		let coord = TileCoord::new(4, 7, 8).unwrap();
		assert_eq!(format!("{coord:?}"), "TileCoord(4, [7, 8])");
		assert_eq!(coord.to_string(), "4/7/8");
	}

	#[rstest]
	#[case("4/7/8", Some((4, 7, 8)))]
	#[case(" 0/0/0 ", Some((0, 0, 0)))]
	#[case("4/7", None)]
	#[case("4/16/0", None)]
	#[case("a/1/1", None)]
	#[case("4/-1/1", None)]
	fn parse(#[case] input: &str, #[case] expected: Option<(u8, u32, u32)>) {
		let result = input.parse::<TileCoord>().ok().map(|c| (c.level, c.x, c.y));
		assert_eq!(result, expected);
	}
}
