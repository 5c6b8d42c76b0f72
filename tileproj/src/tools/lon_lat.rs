use super::format_pair;
use crate::config::Config;
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// pixel x
	px: f64,

	/// pixel y, growing southwards
	py: f64,

	/// zoom level
	zoom: u8,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let lon_lat = config
		.projector()?
		.lon_lat_from_pixel([arguments.px, arguments.py], arguments.zoom)?;
	println!("{}", format_pair(lon_lat));
	Ok(())
}
