//! Arena perimeter layout
//!
//! Pure geometry: a floor shape goes in, an ordered list of wall
//! placements comes out. No engine types, no state.

pub mod compute;
pub mod placement;
pub mod shape;

pub use compute::compute_layout;
pub use placement::{ArenaLayout, WallPlacement};
pub use shape::{ShapeSpec, chord_length, closing_padding};
