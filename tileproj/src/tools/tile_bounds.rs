use super::RowOrder;
use crate::config::Config;
use anyhow::Result;
use tileproj_core::{BBox, Srs};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding box as west,south,east,north
	#[arg(required = true, allow_hyphen_values = true)]
	bbox: BBox,

	/// zoom level
	#[arg(required = true)]
	zoom: u8,

	#[command(flatten)]
	rows: RowOrder,

	/// reference system of the bounding box: WGS84 or 900913
	#[arg(long, value_name = "SRS")]
	srs: Option<Srs>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let projector = config.projector()?;
	let bounds = projector.tile_bounds_from_bbox(
		&arguments.bbox,
		arguments.zoom,
		arguments.rows.tms_style(config),
		arguments.srs.unwrap_or(config.srs),
	)?;
	log::info!("{} tiles in {bounds:?}", bounds.count());
	println!("{}", bounds.as_string_list());
	Ok(())
}
