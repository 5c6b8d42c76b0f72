use super::RowOrder;
use crate::config::Config;
use anyhow::Result;
use tileproj_core::{Srs, TileCoord};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile address as z/x/y
	#[arg(required = true)]
	tile: TileCoord,

	#[command(flatten)]
	rows: RowOrder,

	/// reference system of the printed box: WGS84 or 900913
	#[arg(long, value_name = "SRS")]
	srs: Option<Srs>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let projector = config.projector()?;
	let bbox = projector.tile_bbox(
		&arguments.tile,
		arguments.rows.tms_style(config),
		arguments.srs.unwrap_or(config.srs),
	)?;
	println!("{}", bbox.as_string_list());
	Ok(())
}
