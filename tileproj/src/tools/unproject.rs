use super::format_pair;
use crate::config::Config;
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// x in meters
	x: f64,

	/// y in meters
	y: f64,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let lon_lat = config.projector()?.to_geographic([arguments.x, arguments.y]);
	println!("{}", format_pair(lon_lat));
	Ok(())
}
