//! Semi-sharp creasing.
//!
//! Sharpness values range from 0–10, with a value of 0 (or less) having no
//! effect on the surface and a value of 10 (or more) making the feature
//! completely sharp. In between, a crease is *semi-sharp*: it stays sharp for
//! as many refinement steps as its sharpness and then blends to smooth.
//!
//! [`Crease`] computes everything related to sharpness that does not depend
//! on a particular scheme: the subdivided sharpness of vertices and edges,
//! the [`Rule`] that applies at a vertex and the fractional weight used to
//! blend two rules when sharpness decays to zero.
//!
//! ```
//! use subdiv_masks::sdc::{Crease, CreasingMethod, Options, Rule};
//!
//! let uniform = Crease::default();
//! assert_eq!(uniform.subdivide_vertex_sharpness(2.5), 1.5);
//! assert_eq!(uniform.subdivide_vertex_sharpness(0.5), 0.0);
//! assert_eq!(uniform.determine_vertex_vertex_rule(0.0, &[2.0, 0.0, 3.0, 0.0]), Rule::Crease);
//!
//! let chaikin = Crease::new(Options {
//!     creasing_method: CreasingMethod::Chaikin,
//!     ..Default::default()
//! });
//! let mut child = [0.0; 3];
//! chaikin.subdivide_edge_sharpness_around_vertex(&[2.0, 4.0, 0.0], &mut child);
//! assert_eq!(child, [1.5, 2.5, 0.0]);
//! ```
use num_enum::TryFromPrimitive;

use super::options::{CreasingMethod, Options};

/// The subdivision rule applied at a vertex, determined by sharpness.
///
/// The values of the variants correspond to the number of sharp edges
/// incident to the vertex (with `Corner` for three or more).
#[repr(u8)]
#[derive(TryFromPrimitive, derive_more::Display, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    #[display("smooth")]
    Smooth = 0,
    #[display("dart")]
    Dart = 1,
    #[display("crease")]
    Crease = 2,
    #[display("corner")]
    Corner = 3,
    #[display("unknown")]
    Unknown = 255,
}

/// Subdivides the sharpness values of the edges around one vertex.
///
/// This is the part of creasing a [`VertexNeighborhood`](super::VertexNeighborhood)
/// delegates to. [`Crease`] is the implementation shipped with the crate.
pub trait CreaseSubdivision {
    /// Writes the subdivided sharpness of every edge in `parent` into the
    /// same slot of `child`.
    ///
    /// `child` must hold at least `parent.len()` values.
    fn subdivide_edge_sharpness_around_vertex(&self, parent: &[f32], child: &mut [f32]);
}

/// Crease-related computations for a set of [`Options`].
///
/// Trivially constructed and `Copy`. Only
/// [`creasing_method`](Options::creasing_method) affects the results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Crease {
    options: Options,
}

impl Crease {
    /// Sharpness of a smooth feature.
    pub const SHARPNESS_SMOOTH: f32 = 0.0;
    /// Sharpness at and above which a feature is infinitely sharp.
    pub const SHARPNESS_INFINITE: f32 = 10.0;

    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns `true` for uniform creasing, where every sharpness value
    /// decays on its own, independent of its neighbors.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.options.creasing_method == CreasingMethod::Uniform
    }

    #[inline]
    pub fn is_smooth(sharpness: f32) -> bool {
        sharpness <= Self::SHARPNESS_SMOOTH
    }

    #[inline]
    pub fn is_sharp(sharpness: f32) -> bool {
        !Self::is_smooth(sharpness)
    }

    #[inline]
    pub fn is_infinite(sharpness: f32) -> bool {
        sharpness >= Self::SHARPNESS_INFINITE
    }

    /// Smooth stays smooth, infinite stays infinite, everything else loses
    /// one and bottoms out at smooth.
    #[inline]
    fn decrement_sharpness(sharpness: f32) -> f32 {
        if Self::is_smooth(sharpness) {
            Self::SHARPNESS_SMOOTH
        } else if Self::is_infinite(sharpness) {
            Self::SHARPNESS_INFINITE
        } else if sharpness > 1.0 {
            sharpness - 1.0
        } else {
            Self::SHARPNESS_SMOOTH
        }
    }

    /// Returns the sharpness of the child of a vertex.
    #[inline]
    pub fn subdivide_vertex_sharpness(&self, vertex_sharpness: f32) -> f32 {
        Self::decrement_sharpness(vertex_sharpness)
    }

    /// Returns the sharpness of the child edge of `edge_sharpness` that is
    /// incident to the end vertex whose edges have the sharpness values
    /// `around_end_vertex` (including the edge itself).
    pub fn subdivide_edge_sharpness_at_vertex(
        &self,
        edge_sharpness: f32,
        around_end_vertex: &[f32],
    ) -> f32 {
        if self.is_uniform() || around_end_vertex.len() < 2 {
            return Self::decrement_sharpness(edge_sharpness);
        }

        if Self::is_smooth(edge_sharpness) {
            return Self::SHARPNESS_SMOOTH;
        }
        if Self::is_infinite(edge_sharpness) {
            return Self::SHARPNESS_INFINITE;
        }

        let (sharp_sum, sharp_count) = sharp_sum_and_count(around_end_vertex);

        let mut sharpness = edge_sharpness;
        if sharp_count > 1 {
            // Chaikin: 3/4 of the edge plus 1/4 of the average of the others.
            let other_average = (sharp_sum - edge_sharpness) / (sharp_count - 1) as f32;
            sharpness = 0.75 * edge_sharpness + 0.25 * other_average;
        }
        (sharpness - 1.0).max(Self::SHARPNESS_SMOOTH)
    }

    /// Subdivides the sharpness of all edges around a vertex at once.
    ///
    /// With *Chaikin* creasing every child value depends on the average of
    /// the other edges, so the sum around the vertex is computed only once.
    ///
    /// # Panics
    ///
    /// If `child` is shorter than `parent`.
    pub fn subdivide_edge_sharpness_around_vertex(&self, parent: &[f32], child: &mut [f32]) {
        let child = &mut child[..parent.len()];

        if self.is_uniform() || parent.len() < 2 {
            for (c, &p) in child.iter_mut().zip(parent) {
                *c = Self::decrement_sharpness(p);
            }
            return;
        }

        let (sharp_sum, sharp_count) = sharp_sum_and_count(parent);
        if sharp_count == 0 {
            child.fill(Self::SHARPNESS_SMOOTH);
            return;
        }

        for (c, &p) in child.iter_mut().zip(parent) {
            *c = if Self::is_smooth(p) {
                Self::SHARPNESS_SMOOTH
            } else if Self::is_infinite(p) {
                Self::SHARPNESS_INFINITE
            } else if sharp_count == 1 {
                Self::decrement_sharpness(p)
            } else {
                let other_average = (sharp_sum - p) / (sharp_count - 1) as f32;
                (0.75 * p + 0.25 * other_average - 1.0).max(Self::SHARPNESS_SMOOTH)
            };
        }
    }

    /// Determines the [`Rule`] at a vertex from its own sharpness and the
    /// sharpness of its incident edges.
    ///
    /// Never returns [`Rule::Unknown`].
    pub fn determine_vertex_vertex_rule(
        &self,
        vertex_sharpness: f32,
        incident_edges: &[f32],
    ) -> Rule {
        if Self::is_sharp(vertex_sharpness) {
            return Rule::Corner;
        }
        let sharp_count = incident_edges.iter().filter(|&&s| Self::is_sharp(s)).count();
        Rule::try_from(sharp_count.min(3) as u8).unwrap_or(Rule::Corner)
    }

    /// Returns the weight, within `[0, 1]`, of the parent rule when the rules
    /// of a vertex and its child differ.
    ///
    /// The weight is the average of all sharpness values that decay to zero
    /// in this step, clamped to `1`. With uniform creasing (or when no child
    /// values are given) those are the parent values in `(0, 1]`. Otherwise
    /// they are the positive parent values whose child value is smooth.
    pub fn compute_fractional_weight_at_vertex(
        &self,
        vertex_sharpness: f32,
        parent: &[f32],
        child: Option<&[f32]>,
    ) -> f32 {
        let decays = |s: f32| 0.0 < s && s <= 1.0;

        let mut transition_count = 0usize;
        let mut transition_sum = 0.0f32;
        if decays(vertex_sharpness) {
            transition_count += 1;
            transition_sum += vertex_sharpness;
        }

        match child {
            Some(child) if !self.is_uniform() => {
                for (&p, &c) in parent.iter().zip(child) {
                    if p > 0.0 && c <= 0.0 {
                        transition_sum += p;
                        transition_count += 1;
                    }
                }
            }
            _ => {
                for &p in parent.iter().filter(|&&p| decays(p)) {
                    transition_sum += p;
                    transition_count += 1;
                }
            }
        }

        if transition_count == 0 {
            0.0
        } else {
            (transition_sum / transition_count as f32).min(1.0)
        }
    }
}

impl CreaseSubdivision for Crease {
    #[inline]
    fn subdivide_edge_sharpness_around_vertex(&self, parent: &[f32], child: &mut [f32]) {
        Crease::subdivide_edge_sharpness_around_vertex(self, parent, child)
    }
}

fn sharp_sum_and_count(sharpness: &[f32]) -> (f32, usize) {
    sharpness.iter().fold((0.0, 0), |(sum, count), &s| {
        (sum + s, count + (s > 0.0) as usize)
    })
}
