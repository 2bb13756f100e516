//! Subdivision schemes and the options that shape their limit surface.
use num_enum::TryFromPrimitive;

/// The subdivision schemes a mask routine may implement.
///
/// The label used by [`Display`](std::fmt::Display) is the short name
/// OpenSubdiv uses for the scheme.
///
/// ```
/// use subdiv_masks::sdc::{Scheme, Split};
///
/// assert_eq!(Scheme::CatmullClark.to_string(), "catmark");
/// assert_eq!(Scheme::Loop.split(), Split::ToTriangles);
/// assert_eq!(Scheme::Loop.regular_vertex_valence(), 6);
/// ```
#[repr(u32)]
#[derive(TryFromPrimitive, derive_more::Display, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// *Bilinear* interpolation.
    #[display("bilinear")]
    Bilinear = 0,
    /// [*Catmull-Clark* subdivision](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface).
    #[display("catmark")]
    CatmullClark = 1,
    /// [*Loop* subdivision](https://en.wikipedia.org/wiki/Loop_subdivision_surface).
    #[display("loop")]
    Loop = 2,
}

/// How a scheme splits a face topologically.
#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    /// Every face becomes quads (*Catmull-Clark*, *Bilinear*).
    ToQuads = 0,
    /// Every triangle becomes four triangles (*Loop*).
    ToTriangles = 1,
    /// Mixed splitting. Not used by any scheme yet.
    Hybrid = 2,
}

/// ### Scheme Traits
///
/// Properties that do not vary with topology or options. They help code that
/// does not know which scheme it is working with.
impl Scheme {
    /// Returns the topological split applied to faces.
    #[inline]
    pub fn split(self) -> Split {
        match self {
            Scheme::Bilinear | Scheme::CatmullClark => Split::ToQuads,
            Scheme::Loop => Split::ToTriangles,
        }
    }

    /// Returns the number of rings of neighbors a mask depends on.
    ///
    /// *Bilinear* masks only use the element itself.
    #[inline]
    pub fn local_neighborhood_size(self) -> usize {
        match self {
            Scheme::Bilinear => 0,
            Scheme::CatmullClark | Scheme::Loop => 1,
        }
    }

    /// Returns the valence of a regular interior vertex.
    ///
    /// *Bilinear* has no notion of regularity and returns `0`.
    #[inline]
    pub fn regular_vertex_valence(self) -> usize {
        match self {
            Scheme::Bilinear => 0,
            Scheme::CatmullClark => 4,
            Scheme::Loop => 6,
        }
    }

    /// Returns the number of vertices of a regular face.
    ///
    /// *Bilinear* has no notion of regularity and returns `0`.
    #[inline]
    pub fn regular_face_valence(self) -> usize {
        match self {
            Scheme::Bilinear => 0,
            Scheme::CatmullClark => 4,
            Scheme::Loop => 3,
        }
    }
}

#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryInterpolation {
    /// No boundary edge interpolation is applied by default.  Boundary faces
    /// are tagged as holes so that the boundary vertices continue to support
    /// the adjacent interior faces, but no surface corresponding to the
    /// boundary faces is generated.
    None = 0,
    /// A sequence of boundary vertices defines a smooth curve to which the
    /// limit surface along boundary faces extends.
    EdgeOnly = 1,
    /// Similar to edge-only but the smooth curve resulting on the boundary is
    /// made to interpolate corner vertices (vertices with exactly one incident
    /// face).
    EdgeAndCorner = 2,
}

#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceVaryingBoundaryInterpolation {
    /// Face-varying data is interpolated linearly everywhere.
    Bilinear = 0,
    /// Smooth along face-varying boundary edges, corners float.
    EdgeOnly = 1,
    /// Smooth along face-varying boundary edges, corners are pinned.
    EdgeAndCorner = 2,
    /// All face-varying boundaries are infinitely sharp.
    AlwaysSharp = 3,
}

#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CreasingMethod {
    /// Apply regular, *Catmull-Clark* semi-sharp crease rules.
    ///
    /// * Note that this may give a jagged look when crease values vary along
    ///   an [edge loop](https://en.wikipedia.org/wiki/Edge_loop).
    Uniform = 0,
    /// Apply *Chaikin* semi-sharp crease rules.
    ///
    /// The *Chaikin Rule* is a variation of the semi-sharp creasing method
    /// that attempts to improve the appearance of creases along a sequence of
    /// connected edges when the sharpness values differ. This choice modifies
    /// the subdivision of sharpness values using Chaikin's curve subdivision
    /// algorithm to consider all sharpness values of edges around a common
    /// vertex when determining the sharpness of child edges.
    Chaikin = 1,
}

#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleSubdivision {
    /// Default *Catmull-Clark* scheme weights at triangles.
    CatmullClark = 0,
    /// Modifies the subdivision behavior at triangular faces to improve the
    /// undesirable surface artefacts that often result in such areas.
    Smooth = 1,
}

#[repr(u32)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NonManifoldInterpolation {
    /// No special treatment.
    None = 0,
    /// Non-manifold features are interpolated smoothly.
    Smooth = 1,
    /// Non-manifold features are made infinitely sharp.
    Sharp = 2,
}

/// All supported options applying to a subdivision scheme.
///
/// These options define the shape of a particular limit surface. They differ
/// from approximations that may be applied at a higher level (limiting
/// adaptive refinement, ignoring fractional creasing, etc.).
///
/// The struct is `Copy` and meant to be passed down by value into the
/// lowest-level computations, e.g. [`Crease::new()`](super::Crease::new).
///
/// # Examples
///
/// ```
/// use subdiv_masks::sdc::{BoundaryInterpolation, CreasingMethod, Options};
///
/// let options = Options {
///     boundary_interpolation: Some(BoundaryInterpolation::EdgeOnly),
///     creasing_method: CreasingMethod::Chaikin,
///     ..Default::default()
/// };
/// assert!(!options.hbr_compatible);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub boundary_interpolation: Option<BoundaryInterpolation>,
    pub face_varying_boundary_interpolation: FaceVaryingBoundaryInterpolation,
    pub non_manifold_interpolation: NonManifoldInterpolation,
    pub creasing_method: CreasingMethod,
    pub triangle_subdivision: TriangleSubdivision,
    /// Restrict to behavior compatible with *Hbr*/*RenderMan*.
    pub hbr_compatible: bool,
}

impl Default for Options {
    /// Create options with the following defaults:
    ///
    /// | Property                              | Value                                                      |
    /// |---------------------------------------|------------------------------------------------------------|
    /// | `boundary_interpolation`              | `None`                                                     |
    /// | `face_varying_boundary_interpolation` | [`Bilinear`](FaceVaryingBoundaryInterpolation::Bilinear)   |
    /// | `non_manifold_interpolation`          | [`None`](NonManifoldInterpolation::None)                   |
    /// | `creasing_method`                     | [`Uniform`](CreasingMethod::Uniform)                       |
    /// | `triangle_subdivision`                | [`CatmullClark`](TriangleSubdivision::CatmullClark)        |
    /// | `hbr_compatible`                      | `false`                                                    |
    fn default() -> Self {
        Self {
            boundary_interpolation: None,
            face_varying_boundary_interpolation: FaceVaryingBoundaryInterpolation::Bilinear,
            non_manifold_interpolation: NonManifoldInterpolation::None,
            creasing_method: CreasingMethod::Uniform,
            triangle_subdivision: TriangleSubdivision::CatmullClark,
            hbr_compatible: false,
        }
    }
}
