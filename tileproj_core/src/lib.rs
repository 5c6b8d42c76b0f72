//! Conversions between WGS84 longitude/latitude, spherical mercator ("900913")
//! meters and the pixel/tile addressing of XYZ and TMS tile pyramids.
//!
//! The central type is [`Projector`], which binds a tile size to a shared table of
//! per-zoom scaling constants and performs every conversion as a pure function.
//!
//! ```
//! use tileproj_core::{Projector, Srs};
//!
//! let projector = Projector::default();
//! let bbox = projector.bbox_from_tile(0, 0, 0, false, Srs::Wgs84).unwrap();
//! assert_eq!(bbox.x_min, -180.0);
//! assert_eq!(format!("{:.4}", bbox.y_max), "85.0511");
//! ```

pub mod constants;
pub use constants::*;

pub mod projector;
pub use projector::*;

pub mod scan;
pub use scan::*;

pub mod types;
pub use types::*;
