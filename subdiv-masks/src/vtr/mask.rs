//! Weight storage over caller-owned slices.
use crate::sdc::MaskWeights;

/// The number of meaningful weights of each kind in a mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskCounts {
    pub vertex: usize,
    pub edge: usize,
    pub face: usize,
}

/// A [`MaskWeights`] implementation writing into three borrowed slices.
///
/// The slices are sized by the caller to the largest mask the scheme can
/// produce for one element. The buffer only tracks how much of each slice is
/// in use for the current element. Counts start at zero.
///
/// ```
/// use subdiv_masks::{sdc::MaskWeights, vtr::MaskBuffer};
///
/// let (mut v, mut e) = ([0.0f32; 8], [0.0f32; 8]);
/// let mut mask = MaskBuffer::new(&mut v, &mut e, &mut []);
///
/// // A smooth boundary edge: the midpoint of its two end vertices.
/// mask.set_vertex_weight_count(2);
/// *mask.vertex_weight_mut(0) = 0.5;
/// *mask.vertex_weight_mut(1) = 0.5;
///
/// assert_eq!(mask.vertex_weight_count(), 2);
/// assert_eq!(mask.vertex_weights(), &[0.5, 0.5]);
/// ```
#[derive(Debug)]
pub struct MaskBuffer<'a, W = f32> {
    vertex_weights: &'a mut [W],
    edge_weights: &'a mut [W],
    face_weights: &'a mut [W],
    counts: MaskCounts,
}

impl<'a, W> MaskBuffer<'a, W> {
    pub fn new(
        vertex_weights: &'a mut [W],
        edge_weights: &'a mut [W],
        face_weights: &'a mut [W],
    ) -> Self {
        Self {
            vertex_weights,
            edge_weights,
            face_weights,
            counts: MaskCounts::default(),
        }
    }

    /// Returns the currently declared counts.
    #[inline]
    pub fn counts(&self) -> MaskCounts {
        self.counts
    }

    /// Returns the vertex weights up to the declared count.
    #[inline]
    pub fn vertex_weights(&self) -> &[W] {
        &self.vertex_weights[..self.counts.vertex]
    }

    /// Returns the edge weights up to the declared count.
    #[inline]
    pub fn edge_weights(&self) -> &[W] {
        &self.edge_weights[..self.counts.edge]
    }

    /// Returns the face weights up to the declared count.
    #[inline]
    pub fn face_weights(&self) -> &[W] {
        &self.face_weights[..self.counts.face]
    }
}

impl<W> MaskWeights for MaskBuffer<'_, W> {
    type Weight = W;

    #[inline]
    fn vertex_weight_count(&self) -> usize {
        self.counts.vertex
    }

    #[inline]
    fn edge_weight_count(&self) -> usize {
        self.counts.edge
    }

    #[inline]
    fn face_weight_count(&self) -> usize {
        self.counts.face
    }

    #[inline]
    fn set_vertex_weight_count(&mut self, count: usize) {
        debug_assert!(count <= self.vertex_weights.len(), "vertex weight count exceeds capacity");
        self.counts.vertex = count;
    }

    #[inline]
    fn set_edge_weight_count(&mut self, count: usize) {
        debug_assert!(count <= self.edge_weights.len(), "edge weight count exceeds capacity");
        self.counts.edge = count;
    }

    #[inline]
    fn set_face_weight_count(&mut self, count: usize) {
        debug_assert!(count <= self.face_weights.len(), "face weight count exceeds capacity");
        self.counts.face = count;
    }

    #[inline]
    fn vertex_weight(&self, index: usize) -> &W {
        debug_assert!(index < self.counts.vertex);
        &self.vertex_weights[index]
    }

    #[inline]
    fn edge_weight(&self, index: usize) -> &W {
        debug_assert!(index < self.counts.edge);
        &self.edge_weights[index]
    }

    #[inline]
    fn face_weight(&self, index: usize) -> &W {
        debug_assert!(index < self.counts.face);
        &self.face_weights[index]
    }

    #[inline]
    fn vertex_weight_mut(&mut self, index: usize) -> &mut W {
        debug_assert!(index < self.counts.vertex);
        &mut self.vertex_weights[index]
    }

    #[inline]
    fn edge_weight_mut(&mut self, index: usize) -> &mut W {
        debug_assert!(index < self.counts.edge);
        &mut self.edge_weights[index]
    }

    #[inline]
    fn face_weight_mut(&mut self, index: usize) -> &mut W {
        debug_assert!(index < self.counts.face);
        &mut self.face_weights[index]
    }
}
