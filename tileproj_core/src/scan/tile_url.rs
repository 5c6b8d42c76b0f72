//! Recognises tile addresses inside tile image URLs.
//!
//! Two URL styles are understood:
//!
//! - path style, ending in `/{z}/{x}/{y}` with an optional retina suffix
//!   (`@2x`), image extension and query string,
//!   e.g. `https://tile.openstreetmap.org/12/2200/1343.png`
//! - query style with `x=`, `y=` and `z=` (or `zoom=`) parameters in any order,
//!   e.g. `https://mt1.google.com/vt/lyrs=m&x=2200&y=1343&z=12`

use crate::TileCoord;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref RE_PATH: Regex = Regex::new(
		r"(?i)/(\d{1,2})/(\d{1,10})/(\d{1,10})(?:@\d+(?:\.\d+)?x)?(?:\.(?:png|jpe?g|webp|pbf|mvt|gif))?(?:[?#].*)?$"
	)
	.unwrap();
}

pub struct TileUrl;

impl TileUrl {
	/// Extracts the tile address of `url`, or `None` if it is not a tile URL.
	///
	/// Addresses outside the `2^z` grid are rejected.
	///
	/// ```
	/// use tileproj_core::{TileCoord, TileUrl};
	///
	/// let coord = TileUrl::parse("https://tile.openstreetmap.org/12/2200/1343.png").unwrap();
	/// assert_eq!(coord, TileCoord::new(12, 2200, 1343).unwrap());
	/// assert!(TileUrl::parse("https://example.org/logo.png").is_none());
	/// ```
	pub fn parse(url: &str) -> Option<TileCoord> {
		let (z, x, y) = Self::parse_path(url).or_else(|| Self::parse_query(url))?;
		match TileCoord::new(z, x, y) {
			Ok(coord) => Some(coord),
			Err(err) => {
				log::debug!("ignoring tile url {url}: {err}");
				None
			}
		}
	}

	fn parse_path(url: &str) -> Option<(u8, u32, u32)> {
		let captures = RE_PATH.captures(url)?;
		Some((
			captures[1].parse().ok()?,
			captures[2].parse().ok()?,
			captures[3].parse().ok()?,
		))
	}

	fn parse_query(url: &str) -> Option<(u8, u32, u32)> {
		let (mut z, mut x, mut y) = (None, None, None);
		for pair in url.split(['?', '&', ';', '/', '#']) {
			let Some((key, value)) = pair.split_once('=') else {
				continue;
			};
			match key.to_lowercase().as_str() {
				"x" => x = value.parse().ok(),
				"y" => y = value.parse().ok(),
				"z" | "zoom" => z = value.parse().ok(),
				_ => {}
			}
		}
		Some((z?, x?, y?))
	}
}
