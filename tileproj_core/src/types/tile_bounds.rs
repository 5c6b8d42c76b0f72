use crate::TileCoord;
use std::fmt::{self, Debug};

/// Inclusive range of tile indices covering a bounding box at one zoom level.
///
/// The fields are signed because the projector does not validate its inputs:
/// a box reaching past the antimeridian or the poles yields indices outside the
/// `0..2^zoom` grid, and those are passed on as they are.
///
/// ```
/// use tileproj_core::{TileBounds, TileCoord};
///
/// let bounds = TileBounds::new(2, 1, 3, 2);
/// assert_eq!(bounds.count(), 4);
/// assert!(bounds.contains(&TileCoord::new(2, 3, 1).unwrap()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileBounds {
	pub min_x: i64,
	pub min_y: i64,
	pub max_x: i64,
	pub max_y: i64,
}

impl TileBounds {
	#[must_use]
	pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> TileBounds {
		TileBounds {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.max_x < self.min_x || self.max_y < self.min_y
	}

	/// Number of tiles in the range, 0 when empty, saturating at `u64::MAX`.
	pub fn count(&self) -> u64 {
		if self.is_empty() {
			return 0;
		}
		let width = self.max_x.abs_diff(self.min_x).saturating_add(1);
		let height = self.max_y.abs_diff(self.min_y).saturating_add(1);
		width.saturating_mul(height)
	}

	pub fn contains(&self, coord: &TileCoord) -> bool {
		let (x, y) = (i64::from(coord.x), i64::from(coord.y));
		x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
	}

	/// Returns `min_x,min_y,max_x,max_y`.
	#[must_use]
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.min_x, self.min_y, self.max_x, self.max_y)
	}
}

impl Debug for TileBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileBounds(x: {}..={}, y: {}..={})",
			self.min_x, self.max_x, self.min_y, self.max_y
		)
	}
}
