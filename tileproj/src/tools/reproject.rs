use crate::config::Config;
use anyhow::Result;
use tileproj_core::{BBox, Srs};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding box as west,south,east,north
	#[arg(required = true, allow_hyphen_values = true)]
	bbox: BBox,

	/// target reference system; the box is read in the other one
	#[arg(long, value_name = "SRS", default_value = "900913")]
	to: Srs,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let bbox = config.projector()?.reproject(&arguments.bbox, arguments.to);
	println!("{}", bbox.as_string_list());
	Ok(())
}
