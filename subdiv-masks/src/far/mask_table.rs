//! Table of subdivision masks.
//!
//! A mask holds the weights that place one child vertex relative to the
//! neighborhood of its parent face, edge or vertex. A [`MaskTable`] stores one
//! mask per parent element of a level, each in a fixed-size slot, so a mask
//! routine can fill the slots independently of each other and, with the
//! `rayon` feature, in parallel.
//!
//! The `compute_*_masks` functions drive a mask routine over every element of
//! a level, repositioning a single neighborhood cursor as they go. Under
//! sparse refinement only some elements have a child vertex. The drivers
//! taking a child map skip the others and leave their masks empty.
//!
//! ```
//! use subdiv_masks::{
//!     far,
//!     sdc::{EdgeNeighborhood, MaskWeights},
//!     vtr::{TopologyDescriptor, TopologyLevel},
//! };
//!
//! let quad = TopologyDescriptor::new(4, &[4], &[0, 1, 2, 3])?;
//! let level = TopologyLevel::new(&quad)?;
//!
//! // Every edge of a single quad is a boundary: midpoint masks.
//! let masks = far::compute_edge_vertex_masks(&level, |edge, mask| {
//!     assert_eq!(edge.face_count(), 1);
//!     mask.set_vertex_weight_count(2);
//!     *mask.vertex_weight_mut(0) = 0.5;
//!     *mask.vertex_weight_mut(1) = 0.5;
//! });
//!
//! assert_eq!(masks.len(), 4);
//! assert!(masks.iter().all(|m| m.vertex_weights() == [0.5, 0.5]));
//! # Ok::<(), subdiv_masks::Error>(())
//! ```
use itertools::izip;

use crate::{
    vtr::{EdgeInterface, FaceInterface, MaskBuffer, MaskCounts, TopologyLevel, VertexInterface},
    Error, Index, Result,
};

/// The number of weight slots of each kind reserved per mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskCapacity {
    pub vertex: usize,
    pub edge: usize,
    pub face: usize,
}

impl MaskCapacity {
    /// Slot strides. Never zero so every element maps to a chunk.
    #[inline]
    fn strides(&self) -> (usize, usize, usize) {
        (self.vertex.max(1), self.edge.max(1), self.face.max(1))
    }
}

/// Gives read access to a single mask in a [`MaskTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mask<'a> {
    vertex_weights: &'a [f32],
    edge_weights: &'a [f32],
    face_weights: &'a [f32],
}

impl<'a> Mask<'a> {
    /// Returns the weights of the parent vertices.
    #[inline]
    pub fn vertex_weights(&self) -> &'a [f32] {
        self.vertex_weights
    }

    /// Returns the weights of the parent edges.
    #[inline]
    pub fn edge_weights(&self) -> &'a [f32] {
        self.edge_weights
    }

    /// Returns the weights of the parent faces.
    #[inline]
    pub fn face_weights(&self) -> &'a [f32] {
        self.face_weights
    }
}

/// Container for mask data.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskTable {
    capacity: MaskCapacity,
    vertex_weights: Vec<f32>,
    edge_weights: Vec<f32>,
    face_weights: Vec<f32>,
    counts: Vec<MaskCounts>,
}

impl MaskTable {
    /// Create a table of `len` empty masks.
    pub fn new(len: usize, capacity: MaskCapacity) -> Self {
        let (vertex, edge, face) = capacity.strides();
        Self {
            capacity,
            vertex_weights: vec![0.0; len * vertex],
            edge_weights: vec![0.0; len * edge],
            face_weights: vec![0.0; len * face],
            counts: vec![MaskCounts::default(); len],
        }
    }

    /// A table with one mask per face of `level`, sized for the child vertex
    /// of a face.
    pub fn for_face_vertices(level: &TopologyLevel) -> Self {
        Self::new(
            level.face_count(),
            MaskCapacity {
                vertex: level.max_face_vertices(),
                edge: 0,
                face: 0,
            },
        )
    }

    /// A table with one mask per edge of `level`, sized for the child vertex
    /// of an edge.
    pub fn for_edge_vertices(level: &TopologyLevel) -> Self {
        Self::new(
            level.edge_count(),
            MaskCapacity {
                vertex: 2,
                edge: 0,
                face: level.max_edge_faces(),
            },
        )
    }

    /// A table with one mask per vertex of `level`, sized for the child
    /// vertex of a vertex.
    pub fn for_vertex_vertices(level: &TopologyLevel) -> Self {
        Self::new(
            level.vertex_count(),
            MaskCapacity {
                vertex: 1,
                edge: level.max_valence(),
                face: level.max_vertex_faces(),
            },
        )
    }

    /// Returns the number of masks in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }

    #[inline]
    pub fn capacity(&self) -> MaskCapacity {
        self.capacity
    }

    /// Returns the mask at `index`, or `None` if `index` is not in the table.
    pub fn mask(&self, index: Index) -> Option<Mask<'_>> {
        let index = usize::from(index);
        (index < self.len()).then(|| self.mask_at(index))
    }

    /// Returns an iterator over all masks, in element order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Mask<'_>> + '_ {
        (0..self.len()).map(|index| self.mask_at(index))
    }

    fn mask_at(&self, index: usize) -> Mask<'_> {
        let (vertex, edge, face) = self.capacity.strides();
        let counts = &self.counts[index];
        Mask {
            vertex_weights: &self.vertex_weights[index * vertex..][..counts.vertex],
            edge_weights: &self.edge_weights[index * edge..][..counts.edge],
            face_weights: &self.face_weights[index * face..][..counts.face],
        }
    }

    /// Runs `f` on the mask of every element, in element order.
    ///
    /// Each call sees a fresh [`MaskBuffer`] with all counts zero, holding the
    /// slots of that element. The counts declared by `f` are stored with the
    /// weights.
    pub fn compute<F>(&mut self, f: F)
    where
        F: FnMut(Index, &mut MaskBuffer<'_>),
    {
        self.compute_selected(|_| true, f);
    }

    /// Like [`compute()`](Self::compute), but only for the elements for which
    /// `selected` returns `true`.
    ///
    /// The masks of all other elements are left empty.
    pub fn compute_selected<P, F>(&mut self, mut selected: P, mut f: F)
    where
        P: FnMut(Index) -> bool,
        F: FnMut(Index, &mut MaskBuffer<'_>),
    {
        let capacity = self.capacity;
        let (vertex, edge, face) = capacity.strides();
        for (index, (v, e, fw, counts)) in izip!(
            self.vertex_weights.chunks_mut(vertex),
            self.edge_weights.chunks_mut(edge),
            self.face_weights.chunks_mut(face),
            self.counts.iter_mut(),
        )
        .enumerate()
        {
            let index = Index::from(index);
            if !selected(index) {
                *counts = MaskCounts::default();
                continue;
            }
            let mut mask = MaskBuffer::new(
                &mut v[..capacity.vertex],
                &mut e[..capacity.edge],
                &mut fw[..capacity.face],
            );
            f(index, &mut mask);
            *counts = mask.counts();
        }
    }

    /// Parallel version of [`compute()`](Self::compute).
    ///
    /// The masks of different elements occupy disjoint slots, so `f` runs
    /// without synchronization.
    #[cfg(feature = "rayon")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
    pub fn par_compute<F>(&mut self, f: F)
    where
        F: Fn(Index, &mut MaskBuffer<'_>) + Sync + Send,
    {
        use rayon::prelude::*;

        let capacity = self.capacity;
        let (vertex, edge, face) = capacity.strides();
        (
            self.vertex_weights.par_chunks_mut(vertex),
            self.edge_weights.par_chunks_mut(edge),
            self.face_weights.par_chunks_mut(face),
            self.counts.par_iter_mut(),
        )
            .into_par_iter()
            .enumerate()
            .for_each(|(index, (v, e, fw, counts))| {
                let mut mask = MaskBuffer::new(
                    &mut v[..capacity.vertex],
                    &mut e[..capacity.edge],
                    &mut fw[..capacity.face],
                );
                f(Index::from(index), &mut mask);
                *counts = mask.counts();
            });
    }
}

/// Computes the mask of the child vertex of every face of `level`.
pub fn compute_face_vertex_masks<F>(level: &TopologyLevel, f: F) -> MaskTable
where
    F: FnMut(&FaceInterface, &mut MaskBuffer<'_>),
{
    face_vertex_masks(level, |_| true, f)
}

/// Computes the masks of the faces of `level` that have a child vertex.
///
/// `child_vertices[f]` is the child vertex of face `f`, or `None` if the face
/// is not refined. The masks of faces without a child are left empty.
///
/// # Errors
///
/// [`Error::InvalidBufferSize`] if `child_vertices` does not have one entry
/// per face.
pub fn compute_face_vertex_masks_sparse<F>(
    level: &TopologyLevel,
    child_vertices: &[Option<Index>],
    f: F,
) -> Result<MaskTable>
where
    F: FnMut(&FaceInterface, &mut MaskBuffer<'_>),
{
    check_child_map_len(child_vertices, level.face_count())?;
    Ok(face_vertex_masks(
        level,
        |face| child_vertices[usize::from(face)].is_some(),
        f,
    ))
}

fn face_vertex_masks<P, F>(level: &TopologyLevel, selected: P, mut f: F) -> MaskTable
where
    P: FnMut(Index) -> bool,
    F: FnMut(&FaceInterface, &mut MaskBuffer<'_>),
{
    let mut table = MaskTable::for_face_vertices(level);
    table.compute_selected(selected, |face, mask| {
        let vertex_count = level.face_vertices(face).map_or(0, <[Index]>::len);
        f(&FaceInterface::new(vertex_count), mask);
    });
    table
}

/// Computes the mask of the child vertex of every edge of `level`.
pub fn compute_edge_vertex_masks<F>(level: &TopologyLevel, f: F) -> MaskTable
where
    F: FnMut(&EdgeInterface<'_, TopologyLevel>, &mut MaskBuffer<'_>),
{
    edge_vertex_masks(level, |_| true, f)
}

/// Computes the masks of the edges of `level` that have a child vertex.
///
/// `child_vertices[e]` is the child vertex of edge `e`, or `None` if the edge
/// is not refined. The masks of edges without a child are left empty.
///
/// # Errors
///
/// [`Error::InvalidBufferSize`] if `child_vertices` does not have one entry
/// per edge.
pub fn compute_edge_vertex_masks_sparse<F>(
    level: &TopologyLevel,
    child_vertices: &[Option<Index>],
    f: F,
) -> Result<MaskTable>
where
    F: FnMut(&EdgeInterface<'_, TopologyLevel>, &mut MaskBuffer<'_>),
{
    check_child_map_len(child_vertices, level.edge_count())?;
    Ok(edge_vertex_masks(
        level,
        |edge| child_vertices[usize::from(edge)].is_some(),
        f,
    ))
}

fn edge_vertex_masks<P, F>(level: &TopologyLevel, selected: P, mut f: F) -> MaskTable
where
    P: FnMut(Index) -> bool,
    F: FnMut(&EdgeInterface<'_, TopologyLevel>, &mut MaskBuffer<'_>),
{
    let mut table = MaskTable::for_edge_vertices(level);
    let mut hood = EdgeInterface::new(level);
    table.compute_selected(selected, |edge, mask| {
        hood.set_index(edge);
        f(&hood, mask);
    });
    table
}

/// Computes the mask of the child vertex of every refined vertex of
/// `parent`.
///
/// `child_vertices[p]` is the vertex of `child` that vertex `p` of `parent`
/// refines into, or `None` if `p` is not refined. The masks of vertices
/// without a child are left empty.
///
/// # Errors
///
/// [`Error::InvalidBufferSize`] if `child_vertices` does not have one entry
/// per parent vertex. [`Error::IndexOutOfBounds`] if an entry is not a vertex
/// of `child`.
pub fn compute_vertex_vertex_masks<F>(
    parent: &TopologyLevel,
    child: &TopologyLevel,
    child_vertices: &[Option<Index>],
    mut f: F,
) -> Result<MaskTable>
where
    F: FnMut(&VertexInterface<'_, TopologyLevel>, &mut MaskBuffer<'_>),
{
    check_child_map_len(child_vertices, parent.vertex_count())?;
    if let Some(index) = child_vertices
        .iter()
        .flatten()
        .find(|&&v| child.vertex_count() <= usize::from(v))
    {
        return Err(Error::IndexOutOfBounds {
            index: usize::from(*index),
            max: child.vertex_count(),
        });
    }

    let mut table = MaskTable::for_vertex_vertices(parent);
    let mut hood: Option<VertexInterface<'_, TopologyLevel>> = None;
    table.compute_selected(
        |vertex| child_vertices[usize::from(vertex)].is_some(),
        |vertex, mask| {
            let Some(child_vertex) = child_vertices[usize::from(vertex)] else {
                return;
            };
            // Created on first use: binding a cursor reads the vertex.
            let hood = hood.get_or_insert_with(|| VertexInterface::new(parent, child));
            hood.set_index(vertex, child_vertex);
            f(hood, mask);
        },
    );
    Ok(table)
}

fn check_child_map_len(child_vertices: &[Option<Index>], expected: usize) -> Result<()> {
    if child_vertices.len() != expected {
        return Err(Error::InvalidBufferSize {
            expected,
            actual: child_vertices.len(),
        });
    }
    Ok(())
}
