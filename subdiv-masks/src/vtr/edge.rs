use super::Topology;
use crate::sdc::{CreaseSubdivision, EdgeNeighborhood};
use crate::Index;

/// A cursor over the edges of one level.
///
/// Reposition it with [`set_index()`](Self::set_index) to visit many edges
/// with one instance. Every query reads the level directly; nothing is
/// cached.
#[derive(Debug)]
pub struct EdgeInterface<'a, T: Topology + ?Sized> {
    level: &'a T,
    edge: Index,
}

// Derives would require `T: Clone`.
impl<T: Topology + ?Sized> Clone for EdgeInterface<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Topology + ?Sized> Copy for EdgeInterface<'_, T> {}

impl<'a, T: Topology + ?Sized> EdgeInterface<'a, T> {
    /// Creates a cursor bound to edge `0`.
    #[inline]
    pub fn new(level: &'a T) -> Self {
        Self::with_index(level, Index(0))
    }

    #[inline]
    pub fn with_index(level: &'a T, edge: Index) -> Self {
        Self { level, edge }
    }

    /// Rebinds the cursor to `edge` of the same level.
    #[inline]
    pub fn set_index(&mut self, edge: Index) {
        self.edge = edge;
    }

    #[inline]
    pub fn index(&self) -> Index {
        self.edge
    }
}

impl<T: Topology + ?Sized> EdgeNeighborhood for EdgeInterface<'_, T> {
    #[inline]
    fn face_count(&self) -> usize {
        self.level.edge_faces(self.edge).len()
    }

    #[inline]
    fn sharpness(&self) -> f32 {
        self.level.edge_sharpness(self.edge)
    }

    /// Both child edges get the parent sharpness minus one.
    ///
    /// The result is not clamped: a smooth edge yields `-1.0` for both
    /// children. The `crease` is not consulted.
    #[inline]
    fn child_sharpnesses<C: CreaseSubdivision + ?Sized>(&self, _crease: &C) -> [f32; 2] {
        let sharpness = self.sharpness() - 1.0;
        [sharpness; 2]
    }

    fn vertex_count_per_face<'b>(&self, vertices_per_face: &'b mut [usize]) -> &'b mut [usize] {
        let faces = self.level.edge_faces(self.edge);
        let out = &mut vertices_per_face[..faces.len()];
        for (count, &face) in out.iter_mut().zip(faces) {
            *count = self.level.face_vertices(face).len();
        }
        out
    }
}
