//! Tests for building and inspecting topology levels.

use subdiv_masks::vtr::{TopologyDescriptor, TopologyLevel};
use subdiv_masks::{Error, Index};

const CUBE_VERTICES_PER_FACE: [u32; 6] = [4; 6];
#[rustfmt::skip]
const CUBE_FACE_VERTICES: [u32; 24] = [
    0, 1, 3, 2,
    2, 3, 5, 4,
    4, 5, 7, 6,
    6, 7, 1, 0,
    1, 7, 5, 3,
    6, 0, 2, 4,
];

fn cube() -> anyhow::Result<TopologyLevel> {
    let descriptor = TopologyDescriptor::new(8, &CUBE_VERTICES_PER_FACE, &CUBE_FACE_VERTICES)?;
    Ok(TopologyLevel::new(&descriptor)?)
}

#[test]
fn test_cube_inventory() -> anyhow::Result<()> {
    let level = cube()?;

    assert_eq!(level.vertex_count(), 8);
    assert_eq!(level.edge_count(), 12);
    assert_eq!(level.face_count(), 6);
    assert_eq!(level.face_vertex_count(), 24);
    assert_eq!(level.max_valence(), 3);
    assert_eq!(level.max_edge_faces(), 2);
    assert_eq!(level.max_vertex_faces(), 3);
    assert_eq!(level.max_face_vertices(), 4);

    for edge in 0..level.edge_count() {
        let edge = Index::from(edge);
        assert!(!level.is_edge_boundary(edge));
        assert!(!level.is_edge_non_manifold(edge));
        assert_eq!(level.edge_sharpness(edge), Some(0.0));
    }
    Ok(())
}

#[test]
fn test_component_order() -> anyhow::Result<()> {
    let level = cube()?;

    // Edges are numbered by first use, walking face 0 in winding order.
    assert_eq!(level.face_edges(Index(0)), Some(&[Index(0), Index(1), Index(2), Index(3)][..]));
    assert_eq!(level.edge_vertices(Index(0)), Some([Index(0), Index(1)]));
    assert_eq!(level.edge_vertices(Index(1)), Some([Index(1), Index(3)]));

    // Face 1 reuses edge 2 (3-2 of face 0) as its edge 0 (2-3).
    assert_eq!(level.face_edges(Index(1)).map(|e| e[0]), Some(Index(2)));
    assert_eq!(level.edge_faces(Index(2)), Some(&[Index(0), Index(1)][..]));

    assert_eq!(level.vertex_faces(Index(0)), Some(&[Index(0), Index(3), Index(5)][..]));
    assert_eq!(level.face_vertices(Index(5)), Some(&[Index(6), Index(0), Index(2), Index(4)][..]));
    Ok(())
}

#[test]
fn test_relations_out_of_range() -> anyhow::Result<()> {
    let level = cube()?;

    assert!(level.face_vertices(Index(6)).is_none());
    assert!(level.face_edges(Index(6)).is_none());
    assert!(level.edge_vertices(Index(12)).is_none());
    assert!(level.edge_faces(Index(12)).is_none());
    assert!(level.vertex_edges(Index(8)).is_none());
    assert!(level.vertex_faces(Index(8)).is_none());
    assert!(level.edge_sharpness(Index(12)).is_none());
    assert!(level.vertex_sharpness(Index(8)).is_none());
    Ok(())
}

#[test]
fn test_find_edge() -> anyhow::Result<()> {
    let level = cube()?;

    let edge = level.find_edge(Index(3), Index(1)).expect("edge 1-3");
    assert_eq!(edge, Index(1));
    assert_eq!(level.find_edge(Index(1), Index(3)), Some(edge));
    // Opposite corners of a face.
    assert_eq!(level.find_edge(Index(0), Index(3)), None);
    assert_eq!(level.find_edge(Index(42), Index(3)), None);
    Ok(())
}

#[test]
fn test_creases_and_corners() -> anyhow::Result<()> {
    let mut descriptor = TopologyDescriptor::new(8, &CUBE_VERTICES_PER_FACE, &CUBE_FACE_VERTICES)?;
    descriptor
        .creases(&[0, 1, 3, 1], &[2.5, 10.0])
        .corners(&[7], &[4.0]);
    let level = TopologyLevel::new(&descriptor)?;

    assert_eq!(level.edge_sharpness(Index(0)), Some(2.5));
    assert_eq!(level.edge_sharpness(Index(1)), Some(10.0));
    assert_eq!(level.edge_sharpness(Index(2)), Some(0.0));
    assert_eq!(level.vertex_sharpness(Index(7)), Some(4.0));
    assert_eq!(level.vertex_sharpness(Index(0)), Some(0.0));
    Ok(())
}

#[test]
fn test_crease_without_edge_is_skipped() -> anyhow::Result<()> {
    let mut descriptor = TopologyDescriptor::new(8, &CUBE_VERTICES_PER_FACE, &CUBE_FACE_VERTICES)?;
    descriptor.creases(&[0, 3, 0, 1], &[5.0, 1.0]);
    let level = TopologyLevel::new(&descriptor)?;

    assert_eq!(level.edge_sharpness(Index(0)), Some(1.0));
    let sharp = (0..level.edge_count())
        .filter(|&e| level.edge_sharpness(Index::from(e)) != Some(0.0))
        .count();
    assert_eq!(sharp, 1);
    Ok(())
}

#[test]
fn test_set_sharpness() -> anyhow::Result<()> {
    let mut level = cube()?;

    level.set_edge_sharpness(Index(4), 1.5)?;
    level.set_vertex_sharpness(Index(2), 3.0)?;
    assert_eq!(level.edge_sharpness(Index(4)), Some(1.5));
    assert_eq!(level.vertex_sharpness(Index(2)), Some(3.0));

    assert_eq!(
        level.set_edge_sharpness(Index(12), 1.0),
        Err(Error::IndexOutOfBounds { index: 12, max: 12 })
    );
    assert_eq!(
        level.set_vertex_sharpness(Index(8), 1.0),
        Err(Error::IndexOutOfBounds { index: 8, max: 8 })
    );
    Ok(())
}

#[test]
fn test_boundary_and_non_manifold() -> anyhow::Result<()> {
    // Three triangles fanning around the edge 0-1, plus a vertex used by
    // no face.
    let descriptor = TopologyDescriptor::new(6, &[3, 3, 3], &[0, 1, 2, 1, 0, 3, 0, 1, 4])?;
    let level = TopologyLevel::new(&descriptor)?;

    let spine = level.find_edge(Index(0), Index(1)).expect("edge 0-1");
    assert_eq!(level.edge_faces(spine).map(<[Index]>::len), Some(3));
    assert!(level.is_edge_non_manifold(spine));
    assert!(!level.is_edge_boundary(spine));
    assert_eq!(level.max_edge_faces(), 3);

    let rim = level.find_edge(Index(1), Index(2)).expect("edge 1-2");
    assert!(level.is_edge_boundary(rim));
    assert!(level.is_vertex_boundary(Index(2)));

    // The unused vertex has no incident components.
    assert_eq!(level.vertex_edges(Index(5)), Some(&[][..]));
    assert!(!level.is_vertex_boundary(Index(5)));
    Ok(())
}

#[test]
fn test_invalid_descriptors() {
    assert!(matches!(
        TopologyDescriptor::new(4, &[3, 3], &[0, 1, 2, 2, 1]),
        Err(Error::InvalidTopology(_))
    ));

    let descriptor = TopologyDescriptor::new(3, &[2, 3], &[0, 1, 0, 1, 2]).unwrap();
    assert!(matches!(TopologyLevel::new(&descriptor), Err(Error::InvalidTopology(_))));

    let descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 1]).unwrap();
    assert!(matches!(TopologyLevel::new(&descriptor), Err(Error::InvalidTopology(_))));

    let mut descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 2]).unwrap();
    descriptor.creases(&[0, 1, 2], &[1.0]);
    assert!(matches!(TopologyLevel::new(&descriptor), Err(Error::InvalidTopology(_))));

    let mut descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 2]).unwrap();
    descriptor.corners(&[0, 1], &[1.0]);
    assert!(matches!(TopologyLevel::new(&descriptor), Err(Error::InvalidTopology(_))));
}

#[cfg(feature = "topology_validation")]
#[test]
fn test_index_validation() {
    assert_eq!(
        TopologyDescriptor::new(3, &[3], &[0, 1, 3]).err(),
        Some(Error::IndexOutOfBounds { index: 3, max: 3 })
    );

    let mut descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 2]).unwrap();
    descriptor.corners(&[5], &[1.0]);
    assert_eq!(
        TopologyLevel::new(&descriptor).err(),
        Some(Error::IndexOutOfBounds { index: 5, max: 3 })
    );
}

#[cfg(not(feature = "topology_validation"))]
#[test]
fn test_out_of_range_indices_without_validation() -> anyhow::Result<()> {
    let descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 3])?;
    assert_eq!(
        TopologyLevel::new(&descriptor).err(),
        Some(Error::IndexOutOfBounds { index: 3, max: 3 })
    );

    let mut descriptor = TopologyDescriptor::new(3, &[3], &[0, 1, 2])?;
    descriptor.corners(&[5], &[1.0]);
    assert_eq!(
        TopologyLevel::new(&descriptor).err(),
        Some(Error::IndexOutOfBounds { index: 5, max: 3 })
    );
    Ok(())
}
