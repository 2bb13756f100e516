//! The read-only topology queries the neighborhood cursors are built on.
use crate::Index;

/// Read access to one level of refined topology.
///
/// This is all [`EdgeInterface`](super::EdgeInterface) and
/// [`VertexInterface`](super::VertexInterface) need. Implement it to run
/// mask routines directly on another mesh representation.
///
/// Indices outside the level are a precondition violation. Implementations
/// may panic.
///
/// [`TopologyLevel`](super::TopologyLevel) implements this trait. Its inherent
/// methods of the same names are the checked (`Option` returning) variants.
pub trait Topology {
    /// Returns the vertices of `face`, in winding order.
    fn face_vertices(&self, face: Index) -> &[Index];

    /// Returns the faces incident to `edge`.
    fn edge_faces(&self, edge: Index) -> &[Index];

    /// Returns the edges incident to `vertex`.
    fn vertex_edges(&self, vertex: Index) -> &[Index];

    /// Returns the faces incident to `vertex`.
    fn vertex_faces(&self, vertex: Index) -> &[Index];

    fn edge_sharpness(&self, edge: Index) -> f32;

    fn vertex_sharpness(&self, vertex: Index) -> f32;
}
