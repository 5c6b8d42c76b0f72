use super::format_pair;
use crate::config::Config;
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// longitude in degrees
	lon: f64,

	/// latitude in degrees
	lat: f64,

	/// zoom level
	zoom: u8,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let px = config
		.projector()?
		.pixel_from_lon_lat([arguments.lon, arguments.lat], arguments.zoom)?;
	println!("{}", format_pair(px));
	Ok(())
}
