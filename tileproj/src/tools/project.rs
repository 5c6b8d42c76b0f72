use super::format_pair;
use crate::config::Config;
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// longitude in degrees
	lon: f64,

	/// latitude in degrees, values near the poles are clamped to the mercator extent
	lat: f64,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let xy = config.projector()?.to_projected([arguments.lon, arguments.lat]);
	println!("{}", format_pair(xy));
	Ok(())
}
