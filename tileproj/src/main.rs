mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML configuration file [default: $TILEPROJ_CONFIG]
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// tile size in pixels, overrides the configuration
	#[arg(long, global = true, value_name = "PX")]
	size: Option<u32>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the bounding box of a tile
	TileBbox(tools::tile_bbox::Subcommand),

	/// Print the range of tiles covering a bounding box
	TileBounds(tools::tile_bounds::Subcommand),

	/// Convert longitude/latitude to pixel coordinates
	Pixel(tools::pixel::Subcommand),

	/// Convert pixel coordinates to longitude/latitude
	LonLat(tools::lon_lat::Subcommand),

	/// Project longitude/latitude to spherical mercator meters
	Project(tools::project::Subcommand),

	/// Unproject spherical mercator meters to longitude/latitude
	Unproject(tools::unproject::Subcommand),

	/// Reproject a bounding box between WGS84 and 900913
	Reproject(tools::reproject::Subcommand),

	/// Find tile URLs in a text and print the area they cover
	Scan(tools::scan::Subcommand),

	/// Show the effective configuration
	Info(tools::info::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let mut config = Config::load(cli.config.as_deref())?;
	if let Some(size) = cli.size {
		config.projector.size = size;
	}

	match &cli.command {
		Commands::TileBbox(arguments) => tools::tile_bbox::run(arguments, &config),
		Commands::TileBounds(arguments) => tools::tile_bounds::run(arguments, &config),
		Commands::Pixel(arguments) => tools::pixel::run(arguments, &config),
		Commands::LonLat(arguments) => tools::lon_lat::run(arguments, &config),
		Commands::Project(arguments) => tools::project::run(arguments, &config),
		Commands::Unproject(arguments) => tools::unproject::run(arguments, &config),
		Commands::Reproject(arguments) => tools::reproject::run(arguments, &config),
		Commands::Scan(arguments) => tools::scan::run(arguments, &config),
		Commands::Info(arguments) => tools::info::run(arguments, &config),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tileproj"]).unwrap_err().to_string();
		assert!(err.contains("Usage: tileproj [OPTIONS] <COMMAND>"), "{err}");
		assert!(err.contains("tile-bbox"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tileproj", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tileproj "));
	}

	#[test]
	fn global_size_flag() {
		let msg = run_command(vec!["tileproj", "tile-bbox", "0/0/0", "--size", "512"]).unwrap();
		assert!(msg.contains("size: Some(512)"), "{msg}");
	}

	#[test]
	fn zero_size_is_an_error() {
		let err = run_command(vec!["tileproj", "--size", "0", "pixel", "0", "0", "0"]).unwrap_err();
		assert!(format!("{err:#}").contains("tile size must be a positive integer"));
	}

	#[test]
	fn every_conversion_runs() {
		for args in [
			vec!["tileproj", "tile-bbox", "12/2200/1343", "--srs", "900913"],
			vec!["tileproj", "tile-bounds", "13.08,52.33,13.76,52.68", "12", "--tms"],
			vec!["tileproj", "pixel", "-10.5", "40", "3"],
			vec!["tileproj", "lon-lat", "1024", "-5", "3"],
			vec!["tileproj", "project", "-10", "40"],
			vec!["tileproj", "unproject", "-1113194.9", "4865942.3"],
			vec!["tileproj", "reproject", "-10,40,10,50"],
			vec!["tileproj", "info"],
		] {
			run_command(args.clone()).unwrap_or_else(|err| panic!("{args:?}: {err:#}"));
		}
	}
}
