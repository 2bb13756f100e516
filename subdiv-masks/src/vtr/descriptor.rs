//! A container holding references to raw topology data.
//!
//! ## Example
//! ```
//! # use subdiv_masks::vtr::{TopologyDescriptor, TopologyLevel};
//! // Describe the basic topology of a tetrahedron.
//! let mut tetrahedron = TopologyDescriptor::new(
//!     4,
//!     // Four triangles.
//!     &[3; 4],
//!     // Vertex indices for each triangle.
//!     &[2, 1, 0, 3, 2, 0, 1, 3, 0, 2, 3, 1],
//! )?;
//!
//! // Make all edges creased with sharpness 8.0.
//! tetrahedron.creases(&[0, 2, 0, 3, 1, 3, 0, 1, 2, 3, 1, 2], &[8.0; 6]);
//!
//! let level = TopologyLevel::new(&tetrahedron)?;
//! assert_eq!(level.edge_count(), 6);
//! # Ok::<(), subdiv_masks::Error>(())
//! ```
//!
//! ## Semi-Sharp Creases
//! Sharpness values are associated with edges (as creases given by their
//! two end vertices) and with vertices (as corners). Setting sharpness values
//! to a maximum value (10 in this case – a number chosen for historical
//! reasons) effectively modifies the subdivision rules so that the boundaries
//! between the piecewise smooth surfaces are infinitely sharp or
//! discontinuous. Lower values make the feature *semi-sharp*; see
//! [`Crease`](crate::sdc::Crease).
use crate::{Error, Index, Result};

/// A `TopologyDescriptor` holds references to raw topology data as flat index
/// buffers.
///
/// This is used to construct a [`TopologyLevel`](super::TopologyLevel).
///
/// See the [module level documentation](self) for an example.
#[derive(Copy, Clone, Debug)]
pub struct TopologyDescriptor<'a> {
    pub(crate) vertex_count: usize,
    pub(crate) vertices_per_face: &'a [u32],
    pub(crate) vertex_indices_per_face: &'a [Index],
    pub(crate) crease_vertex_pairs: &'a [u32],
    pub(crate) crease_sharpness: &'a [f32],
    pub(crate) corner_vertices: &'a [u32],
    pub(crate) corner_sharpness: &'a [f32],
}

impl<'a> TopologyDescriptor<'a> {
    /// Describes a mesh topology including creases and corners.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - The number of vertices in the mesh.
    /// * `vertices_per_face` - A slice containing the number of vertices for
    ///   each face in the mesh. The length of this is the number of faces in
    ///   the mesh.
    /// * `vertex_indices_per_face` - A flat list of the vertex indices for each
    ///   face in the mesh.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTopology`] if the number of vertex indices is not the
    /// sum of the face arities. With the `topology_validation` feature,
    /// [`Error::IndexOutOfBounds`] if a vertex index is not below
    /// `vertex_count`.
    pub fn new(
        vertex_count: usize,
        vertices_per_face: &'a [u32],
        vertex_indices_per_face: &'a [u32],
    ) -> Result<TopologyDescriptor<'a>> {
        let index_count: usize = vertices_per_face.iter().map(|&n| n as usize).sum();
        if vertex_indices_per_face.len() != index_count {
            return Err(Error::InvalidTopology(
                "The number of vertex indices is not equal to the sum of face arities.".to_string(),
            ));
        }

        #[cfg(feature = "topology_validation")]
        check_vertex_indices(vertex_indices_per_face, vertex_count)?;

        Ok(TopologyDescriptor {
            vertex_count,
            vertices_per_face,
            vertex_indices_per_face: bytemuck::cast_slice(vertex_indices_per_face),
            crease_vertex_pairs: &[],
            crease_sharpness: &[],
            corner_vertices: &[],
            corner_sharpness: &[],
        })
    }

    /// Add creases as vertex index pairs with corresponding sharpness.
    ///
    /// Checked when the level is built.
    #[inline]
    pub fn creases(&mut self, creases: &'a [u32], sharpness: &'a [f32]) -> &mut Self {
        self.crease_vertex_pairs = creases;
        self.crease_sharpness = sharpness;
        self
    }

    /// Add corners as vertex indices with corresponding sharpness.
    ///
    /// Checked when the level is built.
    #[inline]
    pub fn corners(&mut self, corners: &'a [u32], sharpness: &'a [f32]) -> &mut Self {
        self.corner_vertices = corners;
        self.corner_sharpness = sharpness;
        self
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertices_per_face.len()
    }

    /// Checks the crease and corner data.
    pub(crate) fn validate_sharpness(&self) -> Result<()> {
        if self.crease_vertex_pairs.len() % 2 != 0 {
            return Err(Error::InvalidTopology(format!(
                "Crease vertex pairs have odd length {}.",
                self.crease_vertex_pairs.len()
            )));
        }
        if self.crease_vertex_pairs.len() / 2 != self.crease_sharpness.len() {
            return Err(Error::InvalidTopology(format!(
                "{} creases but {} crease sharpness values.",
                self.crease_vertex_pairs.len() / 2,
                self.crease_sharpness.len()
            )));
        }
        if self.corner_vertices.len() != self.corner_sharpness.len() {
            return Err(Error::InvalidTopology(format!(
                "{} corners but {} corner sharpness values.",
                self.corner_vertices.len(),
                self.corner_sharpness.len()
            )));
        }

        #[cfg(feature = "topology_validation")]
        {
            check_vertex_indices(self.crease_vertex_pairs, self.vertex_count)?;
            check_vertex_indices(self.corner_vertices, self.vertex_count)?;
        }

        Ok(())
    }
}

#[cfg(feature = "topology_validation")]
fn check_vertex_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    match indices.iter().find(|&&i| vertex_count <= i as usize) {
        Some(&i) => Err(Error::IndexOutOfBounds {
            index: i as usize,
            max: vertex_count,
        }),
        None => Ok(()),
    }
}
