use crate::config::Config;
use anyhow::Result;
use tileproj_core::cached_sizes;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {}

pub fn run(_arguments: &Subcommand, config: &Config) -> Result<()> {
	let projector = config.projector()?;
	println!("tile size: {}", projector.size());
	println!("tms: {}", config.tms);
	println!("srs: {}", config.srs);
	println!("remote control: {}", config.remote_control.url);
	println!(
		"cached sizes: {}",
		cached_sizes().iter().map(u32::to_string).collect::<Vec<_>>().join(",")
	);
	Ok(())
}
