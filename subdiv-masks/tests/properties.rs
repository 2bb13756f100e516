//! Property tests: the cursors agree with the level they read, for random
//! meshes.

use proptest::prelude::*;

use subdiv_masks::sdc::{
    Crease, CreasingMethod, EdgeNeighborhood, FaceNeighborhood, MaskWeights, Options,
    VertexNeighborhood,
};
use subdiv_masks::vtr::{EdgeInterface, TopologyDescriptor, TopologyLevel, VertexInterface};
use subdiv_masks::{far, Index};

/// A grid of `rows x cols` cells, each a quad or split into two triangles,
/// with edge and vertex sharpness drawn from `sharpness` in turn.
fn grid(rows: usize, cols: usize, split: &[bool], sharpness: &[f32]) -> TopologyLevel {
    let vertex = |r: usize, c: usize| (r * (cols + 1) + c) as u32;

    let mut vertices_per_face = Vec::new();
    let mut face_vertices = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let [a, b, d, e] = [
                vertex(r, c),
                vertex(r, c + 1),
                vertex(r + 1, c + 1),
                vertex(r + 1, c),
            ];
            if split[(r * cols + c) % split.len()] {
                vertices_per_face.extend([3, 3]);
                face_vertices.extend([a, b, d, a, d, e]);
            } else {
                vertices_per_face.push(4);
                face_vertices.extend([a, b, d, e]);
            }
        }
    }

    let vertex_count = (rows + 1) * (cols + 1);
    let descriptor = TopologyDescriptor::new(vertex_count, &vertices_per_face, &face_vertices)
        .expect("grid descriptor");
    let mut level = TopologyLevel::new(&descriptor).expect("grid level");

    let mut values = sharpness.iter().copied().cycle();
    for edge in 0..level.edge_count() {
        let s = values.next().unwrap_or(0.0);
        level.set_edge_sharpness(Index::from(edge), s).expect("edge in range");
    }
    for vertex in 0..level.vertex_count() {
        let s = values.next().unwrap_or(0.0);
        level.set_vertex_sharpness(Index::from(vertex), s).expect("vertex in range");
    }
    level
}

fn sharpness_value() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), Just(10.0f32), 0.0f32..4.0]
}

fn arb_grid() -> impl Strategy<Value = TopologyLevel> {
    (
        1usize..5,
        1usize..5,
        prop::collection::vec(any::<bool>(), 1..8),
        prop::collection::vec(sharpness_value(), 1..16),
    )
        .prop_map(|(rows, cols, split, sharpness)| grid(rows, cols, &split, &sharpness))
}

proptest! {
    #[test]
    fn face_vertex_count_matches_level(level in arb_grid()) {
        let masks = far::compute_face_vertex_masks(&level, |face, mask| {
            mask.set_vertex_weight_count(face.vertex_count());
        });
        for (face, mask) in masks.iter().enumerate() {
            let vertices = level.face_vertices(Index::from(face)).expect("face in range");
            prop_assert_eq!(mask.vertex_weights().len(), vertices.len());
        }
    }

    #[test]
    fn edge_queries_match_level(level in arb_grid()) {
        let mut hood = EdgeInterface::new(&level);
        let mut vertices_per_face = [0usize; 4];

        for edge in (0..level.edge_count()).map(Index::from) {
            hood.set_index(edge);
            let faces = level.edge_faces(edge).expect("edge in range");
            prop_assert_eq!(hood.face_count(), faces.len());

            let written = hood.vertex_count_per_face(&mut vertices_per_face);
            prop_assert_eq!(written.len(), faces.len());
            for (&count, &face) in written.iter().zip(faces) {
                prop_assert_eq!(Some(count), level.face_vertices(face).map(<[Index]>::len));
            }

            let s = level.edge_sharpness(edge).expect("edge in range");
            prop_assert_eq!(hood.sharpness(), s);
            prop_assert_eq!(hood.child_sharpnesses(&Crease::default()), [s - 1.0; 2]);
        }
    }

    #[test]
    fn vertex_queries_match_level(level in arb_grid(), chaikin in any::<bool>()) {
        let crease = Crease::new(Options {
            creasing_method: if chaikin {
                CreasingMethod::Chaikin
            } else {
                CreasingMethod::Uniform
            },
            ..Default::default()
        });
        let mut hood = VertexInterface::new(&level, &level);
        let mut sharpness = [0.0f32; 8];
        let mut child = [0.0f32; 8];

        for vertex in (0..level.vertex_count()).map(Index::from) {
            hood.set_index(vertex, vertex);
            let edges = level.vertex_edges(vertex).expect("vertex in range");
            prop_assert_eq!(hood.edge_count(), edges.len());
            prop_assert_eq!(
                Some(hood.face_count()),
                level.vertex_faces(vertex).map(<[Index]>::len)
            );
            prop_assert_eq!(Some(hood.sharpness()), level.vertex_sharpness(vertex));
            prop_assert_eq!(Some(hood.child_sharpness(&crease)), level.vertex_sharpness(vertex));

            let parent = hood.sharpness_per_edge(&mut sharpness).to_vec();
            prop_assert_eq!(parent.len(), edges.len());
            for (&s, &edge) in parent.iter().zip(edges) {
                prop_assert_eq!(Some(s), level.edge_sharpness(edge));
            }

            let subdivided = hood.child_sharpness_per_edge(&crease, &mut child);
            for (&c, &p) in subdivided.iter().zip(&parent) {
                let expected = crease.subdivide_edge_sharpness_at_vertex(p, &parent);
                prop_assert!((c - expected).abs() < 1e-5, "{} vs {}", c, expected);
            }
        }
    }
}
