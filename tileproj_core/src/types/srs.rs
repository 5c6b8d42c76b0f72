//! Spatial reference systems understood by the projector.
//!
//! Only two systems exist here: geographic WGS84 degrees and spherical mercator
//! meters, commonly labeled "900913" (EPSG:3857).
//!
//! ```
//! use tileproj_core::Srs;
//!
//! assert_eq!("EPSG:3857".parse::<Srs>().unwrap(), Srs::Mercator900913);
//! assert_eq!(Srs::default().to_string(), "WGS84");
//! ```

use anyhow::{Result, bail};
use serde::Deserialize;
use std::{
	fmt::{self, Display},
	str::FromStr,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Srs {
	/// Longitude/latitude in degrees.
	#[default]
	Wgs84,
	/// Spherical mercator meters.
	Mercator900913,
}

impl Srs {
	pub fn as_str(&self) -> &'static str {
		match self {
			Srs::Wgs84 => "WGS84",
			Srs::Mercator900913 => "900913",
		}
	}

	pub fn try_from_str(value: &str) -> Result<Self> {
		Ok(match value.trim().to_uppercase().as_str() {
			"WGS84" | "4326" | "EPSG:4326" => Srs::Wgs84,
			"900913" | "3857" | "EPSG:3857" | "EPSG:900913" => Srs::Mercator900913,
			_ => bail!("unknown srs '{value}', expected 'WGS84' or '900913'"),
		})
	}
}

impl Display for Srs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Srs {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Srs::try_from_str(s)
	}
}

impl TryFrom<String> for Srs {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		Srs::try_from_str(&value)
	}
}
