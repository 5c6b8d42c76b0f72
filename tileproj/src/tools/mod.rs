pub mod info;
pub mod lon_lat;
pub mod pixel;
pub mod project;
pub mod reproject;
pub mod scan;
pub mod tile_bbox;
pub mod tile_bounds;
pub mod unproject;

use crate::config::Config;

/// Tile row convention flags shared by the subcommands that address tiles.
#[derive(clap::Args, Debug)]
pub struct RowOrder {
	/// count tile rows from the south (TMS) instead of the north (XYZ)
	#[arg(long, conflicts_with = "xyz")]
	tms: bool,

	/// count tile rows from the north (XYZ), even if the configuration sets `tms: true`
	#[arg(long)]
	xyz: bool,
}

impl RowOrder {
	/// Whether rows count from the south; flags win over the configuration.
	pub fn tms_style(&self, config: &Config) -> bool {
		if self.xyz { false } else { self.tms || config.tms }
	}
}

/// Formats a coordinate pair as `a,b`.
pub fn format_pair(pair: [f64; 2]) -> String {
	format!("{},{}", pair[0], pair[1])
}
