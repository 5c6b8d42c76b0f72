use super::RowOrder;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{
	fs,
	io::{self, Read},
	path::PathBuf,
};
use tileproj_core::{scan_text, union_bbox};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// text file containing tile URLs, e.g. a saved web page or HAR file;
	/// reads stdin when omitted
	#[arg(verbatim_doc_comment, value_name = "FILE")]
	input: Option<PathBuf>,

	#[command(flatten)]
	rows: RowOrder,

	/// send the load_and_zoom request to the remote control endpoint
	#[arg(long)]
	send: bool,

	/// print a single JSON object instead of two lines
	#[arg(long)]
	json: bool,
}

/// Output of `scan --json`. Non-finite coordinates are written as `null`.
#[derive(Serialize, Debug)]
struct ScanReport<'a> {
	zoom: u8,
	tiles: usize,
	bbox: [f64; 4],
	url: &'a str,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let (text, source) = match &arguments.input {
		Some(path) => (
			fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?,
			format!("{path:?}"),
		),
		None => {
			let mut text = String::new();
			io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
			(text, String::from("stdin"))
		}
	};

	let tiles = scan_text(&text);
	log::info!("found {} tile urls in {source}", tiles.len());

	let projector = config.projector()?;
	let Some(union) = union_bbox(&projector, &tiles, arguments.rows.tms_style(config))? else {
		bail!("no tile urls found in {source}");
	};

	let remote = &config.remote_control;
	let url = remote.load_and_zoom_url(&union.bbox);
	if arguments.json {
		let report = ScanReport {
			zoom: union.zoom,
			tiles: union.count,
			bbox: union.bbox.as_array(),
			url: &url,
		};
		println!("{}", serde_json::to_string(&report)?);
	} else {
		println!("{}", union.bbox.as_string_list());
		println!("{url}");
	}

	if arguments.send {
		remote.send(&union.bbox).await?;
	}
	Ok(())
}
