use anyhow::{Context, Result, ensure};
use std::{fmt::Debug, str::FromStr};

/// A bounding box `[west, south, east, north]` in either WGS84 degrees or
/// spherical mercator meters.
///
/// Unlike a validated geographic box, `BBox` does not check its values: boxes in
/// meters, over-range inputs and even NaN have to pass through the projector
/// untouched. The reference system is carried by the caller (see [`crate::Srs`]).
///
/// # Examples
/// ```
/// use tileproj_core::BBox;
///
/// let mut bbox = BBox::new(-10.0, -5.0, 10.0, 5.0);
/// bbox.extend(&BBox::new(-12.0, -3.0, 8.0, 6.0));
/// assert_eq!(bbox.as_array(), [-12.0, -5.0, 10.0, 6.0]);
/// assert_eq!(bbox.as_string_list(), "-12,-5,10,6");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	/// West (minimum x).
	pub x_min: f64,
	/// South (minimum y).
	pub y_min: f64,
	/// East (maximum x).
	pub x_max: f64,
	/// North (maximum y).
	pub y_max: f64,
}

impl BBox {
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> BBox {
		BBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Builds a box from its lower-left and upper-right corners.
	#[must_use]
	pub fn from_corners(lower_left: [f64; 2], upper_right: [f64; 2]) -> BBox {
		BBox::new(lower_left[0], lower_left[1], upper_right[0], upper_right[1])
	}

	/// `[west, south]`
	#[must_use]
	pub fn lower_left(&self) -> [f64; 2] {
		[self.x_min, self.y_min]
	}

	/// `[east, north]`
	#[must_use]
	pub fn upper_right(&self) -> [f64; 2] {
		[self.x_max, self.y_max]
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the box as `w,s,e,n`.
	#[must_use]
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Grows this box in place so that it covers `other` as well.
	pub fn extend(&mut self, other: &BBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"BBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl From<[f64; 4]> for BBox {
	fn from(input: [f64; 4]) -> Self {
		BBox::new(input[0], input[1], input[2], input[3])
	}
}

impl From<BBox> for [f64; 4] {
	fn from(bbox: BBox) -> Self {
		bbox.as_array()
	}
}

impl TryFrom<Vec<f64>> for BBox {
	type Error = anyhow::Error;

	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"bbox must have 4 elements (west, south, east, north), got {}",
			input.len()
		);
		Ok(BBox::new(input[0], input[1], input[2], input[3]))
	}
}

/// Parses `"west,south,east,north"`, optionally wrapped in brackets.
impl FromStr for BBox {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
		let values = inner
			.split(',')
			.map(|v| {
				v.trim()
					.parse::<f64>()
					.with_context(|| format!("invalid number '{}' in bbox '{s}'", v.trim()))
			})
			.collect::<Result<Vec<f64>>>()?;
		BBox::try_from(values)
	}
}
