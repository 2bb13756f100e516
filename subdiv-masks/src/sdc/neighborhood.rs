//! The interfaces a mask routine queries and writes through.
//!
//! A routine computing the mask of a child vertex is generic over these
//! traits and never sees how topology is stored:
//!
//! ```
//! use subdiv_masks::sdc::{FaceNeighborhood, MaskWeights};
//!
//! // The face-vertex mask of a bilinear or Catmull-Clark scheme: the
//! // centroid of the face.
//! fn face_centroid_mask<F, M>(face: &F, mask: &mut M)
//! where
//!     F: FaceNeighborhood,
//!     M: MaskWeights<Weight = f32>,
//! {
//!     let n = face.vertex_count();
//!     mask.set_vertex_weight_count(n);
//!     mask.set_edge_weight_count(0);
//!     mask.set_face_weight_count(0);
//!     for i in 0..n {
//!         *mask.vertex_weight_mut(i) = 1.0 / n as f32;
//!     }
//! }
//! # use subdiv_masks::vtr::{FaceInterface, MaskBuffer};
//! # let mut v = [0.0; 4];
//! # let mut mask = MaskBuffer::new(&mut v, &mut [], &mut []);
//! # face_centroid_mask(&FaceInterface::new(4), &mut mask);
//! # assert_eq!(*mask.vertex_weight(3), 0.25);
//! ```
use super::crease::CreaseSubdivision;

/// Storage for the weights of one mask.
///
/// Weights come in three kinds, one per kind of parent component the child
/// vertex depends on. The counts declare how many weights of each kind are
/// meaningful for the element currently being processed.
pub trait MaskWeights {
    /// The weight type.
    type Weight;

    fn vertex_weight_count(&self) -> usize;
    fn edge_weight_count(&self) -> usize;
    fn face_weight_count(&self) -> usize;

    fn set_vertex_weight_count(&mut self, count: usize);
    fn set_edge_weight_count(&mut self, count: usize);
    fn set_face_weight_count(&mut self, count: usize);

    /// Returns the vertex weight at `index < vertex_weight_count()`.
    fn vertex_weight(&self, index: usize) -> &Self::Weight;
    /// Returns the edge weight at `index < edge_weight_count()`.
    fn edge_weight(&self, index: usize) -> &Self::Weight;
    /// Returns the face weight at `index < face_weight_count()`.
    fn face_weight(&self, index: usize) -> &Self::Weight;

    fn vertex_weight_mut(&mut self, index: usize) -> &mut Self::Weight;
    fn edge_weight_mut(&mut self, index: usize) -> &mut Self::Weight;
    fn face_weight_mut(&mut self, index: usize) -> &mut Self::Weight;
}

/// The neighborhood of a face, for the mask of its child vertex.
pub trait FaceNeighborhood {
    /// Returns the number of vertices (and so edges) of the face.
    fn vertex_count(&self) -> usize;
}

/// The neighborhood of an edge, for the mask of its child vertex.
pub trait EdgeNeighborhood {
    /// Returns the number of faces incident to the edge.
    ///
    /// `1` for a boundary edge, `2` for an interior manifold edge, more for a
    /// non-manifold edge.
    fn face_count(&self) -> usize;

    /// Returns the sharpness of the edge.
    fn sharpness(&self) -> f32;

    /// Returns the sharpness of the two child edges of the edge.
    fn child_sharpnesses<C: CreaseSubdivision + ?Sized>(&self, crease: &C) -> [f32; 2];

    /// Writes the number of vertices of each incident face, in incident face
    /// order, and returns the written part of `vertices_per_face`.
    ///
    /// `vertices_per_face` must hold at least [`face_count()`](Self::face_count)
    /// values.
    fn vertex_count_per_face<'b>(&self, vertices_per_face: &'b mut [usize]) -> &'b mut [usize];
}

/// The neighborhood of a vertex, for the mask of its child vertex.
pub trait VertexNeighborhood {
    /// Returns the number of edges incident to the vertex.
    fn edge_count(&self) -> usize;

    /// Returns the number of faces incident to the vertex.
    fn face_count(&self) -> usize;

    /// Returns the sharpness of the vertex.
    fn sharpness(&self) -> f32;

    /// Writes the sharpness of each incident edge and returns the written
    /// part of `sharpness`.
    ///
    /// `sharpness` must hold at least [`edge_count()`](Self::edge_count)
    /// values.
    fn sharpness_per_edge<'b>(&self, sharpness: &'b mut [f32]) -> &'b mut [f32];

    /// Returns the sharpness of the child vertex.
    fn child_sharpness<C: CreaseSubdivision + ?Sized>(&self, crease: &C) -> f32;

    /// Writes the sharpness of the child edges around the child vertex and
    /// returns the written part of `sharpness`.
    ///
    /// `sharpness` must hold at least [`edge_count()`](Self::edge_count)
    /// values.
    fn child_sharpness_per_edge<'b, C: CreaseSubdivision + ?Sized>(
        &self,
        crease: &C,
        sharpness: &'b mut [f32],
    ) -> &'b mut [f32];
}
