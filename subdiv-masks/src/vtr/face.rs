use crate::sdc::FaceNeighborhood;

/// The neighborhood of a face: its number of vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceInterface {
    vertex_count: usize,
}

impl FaceInterface {
    #[inline]
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count }
    }
}

impl FaceNeighborhood for FaceInterface {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}
