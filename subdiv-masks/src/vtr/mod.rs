//! Vectorized topology: refinement levels and the neighborhood cursors over
//! them.
//!
//! The cursors implement the [`sdc`](crate::sdc) query traits on top of any
//! [`Topology`]. They borrow the level(s) they read and are meant to live for
//! one pass over the elements of a level.
pub mod descriptor;
mod edge;
mod face;
pub mod level;
mod mask;
mod topology;
mod vertex;

pub use descriptor::TopologyDescriptor;
pub use edge::EdgeInterface;
pub use face::FaceInterface;
pub use level::TopologyLevel;
pub use mask::{MaskBuffer, MaskCounts};
pub use topology::Topology;
pub use vertex::{VertexInterface, MAX_INLINE_VALENCE};
