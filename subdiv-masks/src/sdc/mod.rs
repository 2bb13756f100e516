//! Subdivision core: schemes, options, creasing and the mask query traits.
//!
//! Nothing in here depends on how topology is stored. See [`vtr`](crate::vtr)
//! for the implementations over a [`TopologyLevel`](crate::vtr::TopologyLevel).
pub mod crease;
pub mod neighborhood;
pub mod options;

pub use crease::{Crease, CreaseSubdivision, Rule};
pub use neighborhood::{EdgeNeighborhood, FaceNeighborhood, MaskWeights, VertexNeighborhood};
pub use options::{
    BoundaryInterpolation, CreasingMethod, FaceVaryingBoundaryInterpolation,
    NonManifoldInterpolation, Options, Scheme, Split, TriangleSubdivision,
};
