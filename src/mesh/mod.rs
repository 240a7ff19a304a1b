//! Wall geometry
//!
//! Raw box meshes for engines that take vertex buffers instead of
//! primitive-box calls.

pub mod shapes;
pub mod vertex;

pub use shapes::{WALL_BOX_VERTICES, footprint, layout_vertices, wall_box};
pub use vertex::Vertex;
