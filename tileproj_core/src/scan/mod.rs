//! Finds tile URLs in arbitrary text (HTML, HAR dumps, logs) and computes the area
//! they cover.
//!
//! ```
//! use tileproj_core::{Projector, scan_text, union_bbox};
//!
//! let html = r#"<img src="https://tile.example.org/1/0/0.png"><img src="https://tile.example.org/1/1/0.png">"#;
//! let tiles = scan_text(html);
//! let union = union_bbox(&Projector::default(), &tiles, false).unwrap().unwrap();
//! assert_eq!(union.count, 2);
//! assert_eq!(union.bbox.x_min, -180.0);
//! assert_eq!(union.bbox.y_min, 0.0);
//! ```

mod remote_control;
mod tile_url;

pub use remote_control::*;
pub use tile_url::*;

use crate::{BBox, Projector, Srs, TileCoord};
use anyhow::Result;
use itertools::Itertools;

/// The area covered by the most detailed tiles of a scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileUnion {
	/// Zoom level of the tiles that were merged.
	pub zoom: u8,
	/// Number of tiles at that zoom.
	pub count: usize,
	/// WGS84 bounding box covering all of them.
	pub bbox: BBox,
}

/// Returns every distinct tile address found in URL-like tokens of `text`, in order of
/// first appearance.
pub fn scan_text(text: &str) -> Vec<TileCoord> {
	text
		.split(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '(' | ')' | '`'))
		.filter(|token| token.contains("://") || token.starts_with('/'))
		.filter_map(TileUrl::parse)
		.unique()
		.collect()
}

/// Merges the bounding boxes of the tiles sharing the highest zoom level among `tiles`.
///
/// Lower zoom levels are ignored: a page showing several zooms at once is
/// usually mid-transition and the most detailed layer is the one on screen.
/// Returns `None` for an empty slice.
pub fn union_bbox(projector: &Projector, tiles: &[TileCoord], tms_style: bool) -> Result<Option<TileUnion>> {
	let Some(zoom) = tiles.iter().map(|tile| tile.level).max() else {
		return Ok(None);
	};

	let mut union: Option<TileUnion> = None;
	for tile in tiles.iter().filter(|tile| tile.level == zoom) {
		let bbox = projector.tile_bbox(tile, tms_style, Srs::Wgs84)?;
		match union.as_mut() {
			Some(union) => {
				union.bbox.extend(&bbox);
				union.count += 1;
			}
			None => union = Some(TileUnion { zoom, count: 1, bbox }),
		}
	}

	if let Some(union) = &union {
		let skipped = tiles.len() - union.count;
		if skipped > 0 {
			log::debug!("ignored {skipped} tiles below zoom {zoom}");
		}
		log::info!("{} tiles at zoom {zoom} cover {:?}", union.count, union.bbox);
	}
	Ok(union)
}
