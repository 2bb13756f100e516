//! Feature-adaptive representation: per-level mask storage and the drivers
//! filling it.
pub mod mask_table;

pub use mask_table::{
    compute_edge_vertex_masks, compute_edge_vertex_masks_sparse, compute_face_vertex_masks,
    compute_face_vertex_masks_sparse, compute_vertex_vertex_masks, Mask, MaskCapacity, MaskTable,
};
