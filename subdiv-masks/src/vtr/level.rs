//! Storage for the topology of one refinement level.
use std::collections::HashMap;

use itertools::Itertools;
use smallvec::SmallVec;

use super::{Topology, TopologyDescriptor};
use crate::{Error, Index, Result};

/// Index lists of variable length, one per component, stored back to back.
#[derive(Clone, Debug, PartialEq)]
struct IndexTable {
    offsets: Vec<u32>,
    indices: Vec<Index>,
}

impl IndexTable {
    fn from_rows<'r>(rows: impl IntoIterator<Item = &'r [Index]>) -> Self {
        let mut offsets = vec![0];
        let mut indices = Vec::new();
        for row in rows {
            indices.extend_from_slice(row);
            offsets.push(indices.len() as u32);
        }
        Self { offsets, indices }
    }

    #[inline]
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    fn row(&self, i: usize) -> &[Index] {
        &self.indices[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&[Index]> {
        (i < self.len()).then(|| self.row(i))
    }

    fn max_row_len(&self) -> usize {
        self.offsets
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a) as usize)
            .max()
            .unwrap_or(0)
    }
}

/// The topology of one level of a refinement hierarchy.
///
/// For each of the three component types (*vertices*, *edges* and *faces*)
/// the level stores the incident components of the other two types, plus a
/// sharpness value per edge and per vertex.
///
/// A level is immutable apart from its sharpness values. It is `Send + Sync`
/// and can be shared by any number of neighborhood cursors, including across
/// threads.
///
/// ## Component Order
///
/// Edges are numbered in the order they first occur when walking the faces in
/// order, each face in winding order. Face-edges follow the face winding:
/// edge `i` of a face connects its vertices `i` and `i + 1`. Edge-faces,
/// vertex-faces and vertex-edges list their components in order of first
/// incidence.
#[derive(Clone, Debug, PartialEq)]
pub struct TopologyLevel {
    vertex_count: usize,
    face_vertices: IndexTable,
    face_edges: IndexTable,
    edge_vertices: Vec<[Index; 2]>,
    edge_faces: IndexTable,
    vertex_faces: IndexTable,
    vertex_edges: IndexTable,
    edge_sharpness: Vec<f32>,
    vertex_sharpness: Vec<f32>,
}

impl TopologyLevel {
    /// Builds a level from a [`TopologyDescriptor`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTopology`] for faces with fewer than three vertices,
    /// edges connecting a vertex to itself or malformed crease and corner
    /// data. [`Error::IndexOutOfBounds`] for face or corner indices outside
    /// the vertex range. With the `topology_validation` feature crease
    /// indices are checked as well.
    ///
    /// Creases naming two vertices that share no edge are skipped with a
    /// warning.
    pub fn new(descriptor: &TopologyDescriptor) -> Result<Self> {
        descriptor.validate_sharpness()?;

        let vertex_count = descriptor.vertex_count;
        let face_count = descriptor.face_count();

        let mut edge_lookup: HashMap<(Index, Index), Index> = HashMap::new();
        let mut edge_vertices: Vec<[Index; 2]> = Vec::new();
        let mut edge_faces: Vec<SmallVec<[Index; 2]>> = Vec::new();
        let mut vertex_faces: Vec<SmallVec<[Index; 8]>> = vec![SmallVec::new(); vertex_count];
        let mut vertex_edges: Vec<SmallVec<[Index; 8]>> = vec![SmallVec::new(); vertex_count];
        let mut face_edges: Vec<SmallVec<[Index; 4]>> = Vec::with_capacity(face_count);

        let mut offset = 0;
        for (face, &arity) in descriptor.vertices_per_face.iter().enumerate() {
            let arity = arity as usize;
            if arity < 3 {
                return Err(Error::InvalidTopology(format!(
                    "Face {} has {} vertices (should be at least 3).",
                    face, arity
                )));
            }
            let vertices = &descriptor.vertex_indices_per_face[offset..offset + arity];
            offset += arity;

            let face = Index::from(face);
            for &vertex in vertices {
                vertex_faces
                    .get_mut(usize::from(vertex))
                    .ok_or(Error::IndexOutOfBounds {
                        index: vertex.into(),
                        max: vertex_count,
                    })?
                    .push(face);
            }

            let mut edges = SmallVec::new();
            for (v0, v1) in vertices.iter().copied().circular_tuple_windows() {
                if v0 == v1 {
                    return Err(Error::InvalidTopology(format!(
                        "Face {} has a degenerate edge at vertex {}.",
                        face, v0
                    )));
                }
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                let edge = *edge_lookup.entry(key).or_insert_with(|| {
                    let edge = Index::from(edge_vertices.len());
                    edge_vertices.push([v0, v1]);
                    edge_faces.push(SmallVec::new());
                    vertex_edges[usize::from(v0)].push(edge);
                    vertex_edges[usize::from(v1)].push(edge);
                    edge
                });
                edge_faces[usize::from(edge)].push(face);
                edges.push(edge);
            }
            face_edges.push(edges);
        }

        let mut edge_sharpness = vec![0.0; edge_vertices.len()];
        for (pair, &sharpness) in descriptor
            .crease_vertex_pairs
            .chunks_exact(2)
            .zip(descriptor.crease_sharpness)
        {
            let (v0, v1) = (Index(pair[0]), Index(pair[1]));
            let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            match edge_lookup.get(&key) {
                Some(&edge) => edge_sharpness[usize::from(edge)] = sharpness,
                None => log::warn!("Crease {}-{} does not match any edge, skipped.", v0, v1),
            }
        }

        let mut vertex_sharpness = vec![0.0; vertex_count];
        for (&vertex, &sharpness) in descriptor
            .corner_vertices
            .iter()
            .zip(descriptor.corner_sharpness)
        {
            *vertex_sharpness
                .get_mut(vertex as usize)
                .ok_or(Error::IndexOutOfBounds {
                    index: vertex as usize,
                    max: vertex_count,
                })? = sharpness;
        }

        let level = Self {
            vertex_count,
            face_vertices: IndexTable::from_rows(
                descriptor
                    .vertices_per_face
                    .iter()
                    .scan(0usize, |offset, &arity| {
                        let start = *offset;
                        *offset += arity as usize;
                        Some(&descriptor.vertex_indices_per_face[start..*offset])
                    }),
            ),
            face_edges: IndexTable::from_rows(face_edges.iter().map(|e| e.as_slice())),
            edge_vertices,
            edge_faces: IndexTable::from_rows(edge_faces.iter().map(|f| f.as_slice())),
            vertex_faces: IndexTable::from_rows(vertex_faces.iter().map(|f| f.as_slice())),
            vertex_edges: IndexTable::from_rows(vertex_edges.iter().map(|e| e.as_slice())),
            edge_sharpness,
            vertex_sharpness,
        };

        let non_manifold = (0..level.edge_count())
            .filter(|&e| level.is_edge_non_manifold(e.into()))
            .count();
        if non_manifold > 0 {
            log::debug!("{} non-manifold edges.", non_manifold);
        }
        log::debug!(
            "Built level: {} vertices, {} edges, {} faces, max valence {}.",
            level.vertex_count(),
            level.edge_count(),
            level.face_count(),
            level.max_valence()
        );

        Ok(level)
    }
}

/// ### Methods to Inspect the Overall Inventory of Components
impl TopologyLevel {
    /// Returns the number of vertices in this level.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges in this level.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_vertices.len()
    }

    /// Returns the number of faces in this level.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_vertices.len()
    }

    /// Returns the total number of face-vertices -- the sum of all vertices
    /// for all faces.
    #[inline]
    pub fn face_vertex_count(&self) -> usize {
        self.face_vertices.indices.len()
    }

    /// Returns the maximum number of edges incident to any vertex.
    #[inline]
    pub fn max_valence(&self) -> usize {
        self.vertex_edges.max_row_len()
    }

    /// Returns the maximum number of faces incident to any edge.
    #[inline]
    pub fn max_edge_faces(&self) -> usize {
        self.edge_faces.max_row_len()
    }

    /// Returns the maximum number of faces incident to any vertex.
    #[inline]
    pub fn max_vertex_faces(&self) -> usize {
        self.vertex_faces.max_row_len()
    }

    /// Returns the maximum number of vertices of any face.
    #[inline]
    pub fn max_face_vertices(&self) -> usize {
        self.face_vertices.max_row_len()
    }
}

/// ### Methods to Inspect Topological Relationships for Individual Components
///
/// All return `None` if the component index is not in this level.
impl TopologyLevel {
    /// Returns the vertices incident to a given face.
    #[inline]
    pub fn face_vertices(&self, face: Index) -> Option<&[Index]> {
        self.face_vertices.get(face.into())
    }

    /// Returns the edges incident to a given face.
    #[inline]
    pub fn face_edges(&self, face: Index) -> Option<&[Index]> {
        self.face_edges.get(face.into())
    }

    /// Returns the two vertices of a given edge.
    #[inline]
    pub fn edge_vertices(&self, edge: Index) -> Option<[Index; 2]> {
        self.edge_vertices.get(usize::from(edge)).copied()
    }

    /// Returns the faces incident to a given edge.
    #[inline]
    pub fn edge_faces(&self, edge: Index) -> Option<&[Index]> {
        self.edge_faces.get(edge.into())
    }

    /// Returns the faces incident to a given vertex.
    #[inline]
    pub fn vertex_faces(&self, vertex: Index) -> Option<&[Index]> {
        self.vertex_faces.get(vertex.into())
    }

    /// Returns the edges incident to a given vertex.
    #[inline]
    pub fn vertex_edges(&self, vertex: Index) -> Option<&[Index]> {
        self.vertex_edges.get(vertex.into())
    }

    /// Identify the edge matching the given vertex pair.
    pub fn find_edge(&self, vertex0: Index, vertex1: Index) -> Option<Index> {
        self.vertex_edges(vertex0)?.iter().copied().find(|&edge| {
            let [a, b] = self.edge_vertices[usize::from(edge)];
            (a == vertex0 && b == vertex1) || (a == vertex1 && b == vertex0)
        })
    }
}

/// ### Methods to Inspect Other Topological Properties of Individual Components
impl TopologyLevel {
    /// Returns `true` if the edge has more than two incident faces.
    #[inline]
    pub fn is_edge_non_manifold(&self, edge: Index) -> bool {
        self.edge_faces(edge).is_some_and(|faces| faces.len() > 2)
    }

    /// Returns `true` if the edge has exactly one incident face.
    #[inline]
    pub fn is_edge_boundary(&self, edge: Index) -> bool {
        self.edge_faces(edge).is_some_and(|faces| faces.len() == 1)
    }

    /// Returns `true` if any edge incident to the vertex is a boundary.
    #[inline]
    pub fn is_vertex_boundary(&self, vertex: Index) -> bool {
        self.vertex_edges(vertex)
            .is_some_and(|edges| edges.iter().any(|&edge| self.is_edge_boundary(edge)))
    }
}

/// ### Methods to Inspect and Assign Sharpness
///
/// Assigning sharpness is how a level's builder stores subdivided sharpness
/// values in a child level.
impl TopologyLevel {
    #[inline]
    pub fn edge_sharpness(&self, edge: Index) -> Option<f32> {
        self.edge_sharpness.get(usize::from(edge)).copied()
    }

    #[inline]
    pub fn vertex_sharpness(&self, vertex: Index) -> Option<f32> {
        self.vertex_sharpness.get(usize::from(vertex)).copied()
    }

    pub fn set_edge_sharpness(&mut self, edge: Index, sharpness: f32) -> Result<()> {
        let max = self.edge_sharpness.len();
        let slot = self
            .edge_sharpness
            .get_mut(usize::from(edge))
            .ok_or(Error::IndexOutOfBounds {
                index: edge.into(),
                max,
            })?;
        *slot = sharpness;
        Ok(())
    }

    pub fn set_vertex_sharpness(&mut self, vertex: Index, sharpness: f32) -> Result<()> {
        let max = self.vertex_sharpness.len();
        let slot = self
            .vertex_sharpness
            .get_mut(usize::from(vertex))
            .ok_or(Error::IndexOutOfBounds {
                index: vertex.into(),
                max,
            })?;
        *slot = sharpness;
        Ok(())
    }
}

impl Topology for TopologyLevel {
    #[inline]
    fn face_vertices(&self, face: Index) -> &[Index] {
        self.face_vertices.row(face.into())
    }

    #[inline]
    fn edge_faces(&self, edge: Index) -> &[Index] {
        self.edge_faces.row(edge.into())
    }

    #[inline]
    fn vertex_edges(&self, vertex: Index) -> &[Index] {
        self.vertex_edges.row(vertex.into())
    }

    #[inline]
    fn vertex_faces(&self, vertex: Index) -> &[Index] {
        self.vertex_faces.row(vertex.into())
    }

    #[inline]
    fn edge_sharpness(&self, edge: Index) -> f32 {
        self.edge_sharpness[usize::from(edge)]
    }

    #[inline]
    fn vertex_sharpness(&self, vertex: Index) -> f32 {
        self.vertex_sharpness[usize::from(vertex)]
    }
}
