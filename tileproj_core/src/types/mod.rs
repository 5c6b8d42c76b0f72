//! Value types passed into and out of the projector.

mod bbox;
pub use bbox::*;

mod srs;
pub use srs::*;

mod tile_bounds;
pub use tile_bounds::*;

mod tile_coord;
pub use tile_coord::*;
