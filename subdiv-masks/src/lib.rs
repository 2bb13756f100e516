//#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Subdivision Mask Queries
//!
//! The local neighborhood queries a subdivision scheme needs to compute the
//! *masks* of a refinement step, i.e. the weights applied to a parent face,
//! edge or vertex neighborhood to place each child vertex.
//!
//! The crate does not contain any scheme's weight formulas. It provides the
//! contract between such a formula and the topology it runs on:
//!
//! * [`sdc::FaceNeighborhood`], [`sdc::EdgeNeighborhood`] and
//!   [`sdc::VertexNeighborhood`] expose counts and sharpness around one
//!   element.
//! * [`sdc::MaskWeights`] is where the computed weights go.
//!
//! A mask routine is written once against these traits and works for every
//! topology backend implementing [`vtr::Topology`].
//!
//! The [`vtr`] module has the concrete cursors ([`vtr::FaceInterface`],
//! [`vtr::EdgeInterface`], [`vtr::VertexInterface`], [`vtr::MaskBuffer`]) and
//! an in-memory [`vtr::TopologyLevel`]. The [`sdc`] module has the scheme
//! options and the semi-sharp [`sdc::Crease`] rules. The [`far`] module owns
//! mask storage for a whole level and drives the per-element queries.
//!
//! ## Example
//!
//! ```
//! use subdiv_masks::{
//!     sdc::{Crease, EdgeNeighborhood, MaskWeights},
//!     vtr::{EdgeInterface, MaskBuffer, TopologyDescriptor, TopologyLevel},
//!     Index,
//! };
//!
//! // Two triangles sharing the edge 1-2.
//! let mut descriptor = TopologyDescriptor::new(4, &[3, 3], &[0, 1, 2, 2, 1, 3])?;
//! descriptor.creases(&[1, 2], &[3.0]);
//! let level = TopologyLevel::new(&descriptor)?;
//!
//! let edge = level.find_edge(Index(1), Index(2)).unwrap();
//! let hood = EdgeInterface::with_index(&level, edge);
//! assert_eq!(hood.face_count(), 2);
//! assert_eq!(hood.child_sharpnesses(&Crease::default()), [2.0, 2.0]);
//!
//! // A crease mask: the two end points, half each.
//! let (mut v, mut f) = ([0.0; 2], [0.0; 2]);
//! let mut mask = MaskBuffer::new(&mut v, &mut [], &mut f);
//! mask.set_vertex_weight_count(2);
//! *mask.vertex_weight_mut(0) = 0.5;
//! *mask.vertex_weight_mut(1) = 0.5;
//! assert_eq!(*mask.vertex_weight(1), 0.5);
//! # Ok::<(), subdiv_masks::Error>(())
//! ```
//!
//! ## Cargo Features
#![doc = document_features::document_features!()]
//!
//! ## API Notes
//!
//! * Counts, valences and indices are unsigned (`usize` resp. [`Index`]).
//! * Query preconditions (index ranges, output slice lengths, weight counts)
//!   are checked with `debug_assert!`. Release builds only keep the bounds
//!   checks of slice indexing.
//! * Fallible work, i.e. building a [`vtr::TopologyLevel`], returns
//!   [`Result`].

pub mod error;
pub mod far;
pub mod sdc;
pub mod vtr;

pub use error::{Error, Result};

/// A vertex, edge, or face index in a topology level.
///
/// # Examples
///
/// ```
/// use subdiv_masks::Index;
///
/// let idx = Index::from(42u32);
/// assert_eq!(idx.0, 42);
///
/// let as_usize: usize = Index::from(100usize).into();
/// assert_eq!(as_usize, 100);
/// ```
#[derive(
    Debug,
    derive_more::Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(transparent)]
pub struct Index(pub u32);

impl From<u32> for Index {
    fn from(value: u32) -> Self {
        Index(value)
    }
}

impl From<Index> for u32 {
    fn from(index: Index) -> Self {
        index.0
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Index(value as u32)
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> Self {
        index.0 as usize
    }
}
