use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};
use tileproj_core::{Projector, ProjectorOptions, RemoteControl, Srs};

/// Environment variable naming a configuration file when `--config` is absent.
pub const CONFIG_ENV: &str = "TILEPROJ_CONFIG";

/// Settings shared by all subcommands. Command line flags take precedence.
///
/// ```yaml
/// projector:
///   size: 512
/// tms: true
/// srs: "900913"
/// remote_control:
///   url: http://127.0.0.1:8111
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Projector construction options (tile size)
	#[serde(default)]
	pub projector: ProjectorOptions,

	/// Count tile rows from the south (TMS) by default
	#[serde(default)]
	pub tms: bool,

	/// Default reference system of bounding boxes
	#[serde(default)]
	pub srs: Srs,

	/// Endpoint receiving `load_and_zoom` requests from `scan --send`
	#[serde(default)]
	pub remote_control: RemoteControl,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	#[cfg(test)]
	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))
	}

	/// Reads `path`, or the file named by `TILEPROJ_CONFIG`, or falls back to defaults.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let path = path
			.map(Path::to_path_buf)
			.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
		match path {
			Some(path) => {
				log::debug!("reading config from {path:?}");
				Config::from_path(&path)
			}
			None => Ok(Config::default()),
		}
	}

	pub fn projector(&self) -> Result<Projector> {
		Projector::from_options(&self.projector)
	}
}
