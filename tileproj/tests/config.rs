mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use test_utilities::*;

#[test]
fn info_defaults() {
	let stdout = tileproj_stdout(&["info"]);
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(
		lines[..4],
		[
			"tile size: 256",
			"tms: false",
			"srs: WGS84",
			"remote control: http://127.0.0.1:8111"
		]
	);
	assert_eq!(lines[4], "cached sizes: 256");
}

#[test]
fn config_file_and_flags() {
	let config = temp_config("projector:\n  size: 512\ntms: true\nsrs: \"900913\"\n");
	let path = path_arg(&config);

	let stdout = tileproj_stdout(&["info", "--config", &path]);
	assert!(stdout.contains("tile size: 512\ntms: true\nsrs: 900913\n"), "{stdout}");

	let stdout = tileproj_stdout(&["info", "--config", &path, "--size", "1024"]);
	assert!(stdout.starts_with("tile size: 1024\n"), "{stdout}");

	// tms and srs from the config apply to tile-bbox
	assert_eq!(
		tileproj_stdout(&["tile-bbox", "1/1/1", "--config", &path]),
		tileproj_stdout(&["tile-bbox", "1/1/0", "--srs", "900913"])
	);
	// an explicit --srs wins over the config
	assert_eq!(
		tileproj_stdout(&["tile-bbox", "1/1/1", "--config", &path, "--srs", "WGS84"]),
		tileproj_stdout(&["tile-bbox", "1/1/0"])
	);
}

#[test]
fn xyz_flag_overrides_configured_tms() {
	let config = temp_config("tms: true\n");
	let path = path_arg(&config);
	assert_eq!(
		tileproj_stdout(&["tile-bbox", "3/2/1", "--config", &path, "--xyz"]),
		tileproj_stdout(&["tile-bbox", "3/2/1"])
	);
	assert_eq!(
		tileproj_stdout(&["tile-bounds", "13.08,52.33,13.76,52.68", "12", "--config", &path, "--xyz"]).trim(),
		"2196,1340,2204,1346"
	);
	assert_eq!(
		tileproj_stdout(&["tile-bounds", "13.08,52.33,13.76,52.68", "12", "--config", &path]).trim(),
		"2196,2749,2204,2755"
	);
}

#[test]
fn config_from_environment() {
	let config = temp_config("tms: true\n");
	let stdout = tileproj_cmd()
		.env("TILEPROJ_CONFIG", config.path())
		.arg("info")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	assert!(String::from_utf8(stdout).unwrap().contains("tms: true\n"));
}

#[test]
fn invalid_config() {
	let config = temp_config("zoom: 3\n");
	tileproj_cmd()
		.args(["info", "--config", &path_arg(&config)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("Failed to parse config file"));
}

#[test]
fn missing_config() {
	tileproj_cmd()
		.args(["info", "--config", "/does/not/exist.yaml"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("Failed to open config file"));
}
