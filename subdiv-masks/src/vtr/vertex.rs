use smallvec::SmallVec;

use super::Topology;
use crate::sdc::{CreaseSubdivision, VertexNeighborhood};
use crate::Index;

/// Valence up to which per-edge scratch space lives on the stack.
pub const MAX_INLINE_VALENCE: usize = 16;

/// A cursor over the vertices of a parent level and their children in the
/// child level.
///
/// [`set_index()`](Self::set_index) caches the edge and face counts of the
/// parent vertex. Sharpness is read on demand.
#[derive(Debug)]
pub struct VertexInterface<'a, P: Topology + ?Sized, C: Topology + ?Sized = P> {
    parent: &'a P,
    child: &'a C,
    parent_vertex: Index,
    child_vertex: Index,
    edge_count: usize,
    face_count: usize,
}

impl<P: Topology + ?Sized, C: Topology + ?Sized> Clone for VertexInterface<'_, P, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Topology + ?Sized, C: Topology + ?Sized> Copy for VertexInterface<'_, P, C> {}

impl<'a, P: Topology + ?Sized, C: Topology + ?Sized> VertexInterface<'a, P, C> {
    /// Creates a cursor bound to vertex `0` of both levels.
    #[inline]
    pub fn new(parent: &'a P, child: &'a C) -> Self {
        Self::with_index(parent, child, Index(0), Index(0))
    }

    #[inline]
    pub fn with_index(
        parent: &'a P,
        child: &'a C,
        parent_vertex: Index,
        child_vertex: Index,
    ) -> Self {
        let mut vertex = Self {
            parent,
            child,
            parent_vertex,
            child_vertex,
            edge_count: 0,
            face_count: 0,
        };
        vertex.set_index(parent_vertex, child_vertex);
        vertex
    }

    /// Rebinds the cursor to `parent_vertex` and its child `child_vertex`.
    #[inline]
    pub fn set_index(&mut self, parent_vertex: Index, child_vertex: Index) {
        self.parent_vertex = parent_vertex;
        self.child_vertex = child_vertex;
        self.edge_count = self.parent.vertex_edges(parent_vertex).len();
        self.face_count = self.parent.vertex_faces(parent_vertex).len();
    }

    #[inline]
    pub fn parent_index(&self) -> Index {
        self.parent_vertex
    }

    #[inline]
    pub fn child_index(&self) -> Index {
        self.child_vertex
    }
}

impl<P: Topology + ?Sized, C: Topology + ?Sized> VertexNeighborhood for VertexInterface<'_, P, C> {
    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.face_count
    }

    #[inline]
    fn sharpness(&self) -> f32 {
        self.parent.vertex_sharpness(self.parent_vertex)
    }

    /// Writes [`edge_count()`](VertexNeighborhood::edge_count) values, the
    /// count cached by the last [`set_index()`](Self::set_index).
    fn sharpness_per_edge<'b>(&self, sharpness: &'b mut [f32]) -> &'b mut [f32] {
        let edges = self.parent.vertex_edges(self.parent_vertex);
        let out = &mut sharpness[..self.edge_count];
        for (s, &edge) in out.iter_mut().zip(edges) {
            *s = self.parent.edge_sharpness(edge);
        }
        out
    }

    /// Reads the sharpness the child level already holds for the child
    /// vertex. The `crease` is not consulted.
    #[inline]
    fn child_sharpness<S: CreaseSubdivision + ?Sized>(&self, _crease: &S) -> f32 {
        self.child.vertex_sharpness(self.child_vertex)
    }

    fn child_sharpness_per_edge<'b, S: CreaseSubdivision + ?Sized>(
        &self,
        crease: &S,
        sharpness: &'b mut [f32],
    ) -> &'b mut [f32] {
        let mut parent: SmallVec<[f32; MAX_INLINE_VALENCE]> =
            SmallVec::from_elem(0.0, self.edge_count);
        let parent = self.sharpness_per_edge(&mut parent);

        let out = &mut sharpness[..self.edge_count];
        crease.subdivide_edge_sharpness_around_vertex(parent, out);
        out
    }
}
