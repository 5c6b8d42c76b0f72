use crate::DEFAULT_TILE_SIZE;
use serde::Deserialize;

/// Construction options of a [`crate::Projector`].
///
/// Deserializable so it can sit inside a configuration file:
///
/// ```yaml
/// size: 512
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectorOptions {
	/// Width and height of one tile in pixels at zoom 0.
	pub size: u32,
}

impl ProjectorOptions {
	#[must_use]
	pub fn with_size(size: u32) -> Self {
		Self { size }
	}
}

impl Default for ProjectorOptions {
	fn default() -> Self {
		Self {
			size: DEFAULT_TILE_SIZE,
		}
	}
}
