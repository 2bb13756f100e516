//! Tests for the Index newtype wrapper.

use subdiv_masks::Index;

#[test]
fn test_index_conversions() {
    assert_eq!(Index::from(42u32), Index(42));
    assert_eq!(Index::from(100usize), Index(100));

    let value: u32 = Index(42).into();
    assert_eq!(value, 42);
    let value: usize = Index(100).into();
    assert_eq!(value, 100);
}

#[test]
fn test_index_display_and_debug() {
    assert_eq!(Index(7).to_string(), "7");
    assert_eq!(format!("{:?}", Index(42)), "Index(42)");
}

#[test]
fn test_index_ordering() {
    let idx1 = Index(1);
    let idx2 = Index(2);
    let idx3 = Index(2);

    assert!(idx1 < idx2);
    assert!(idx2 <= idx3);
    assert_eq!(idx2.max(idx1), idx2);
}

#[test]
fn test_index_hash() {
    use std::collections::HashMap;

    let mut map = HashMap::new();
    map.insert(Index(1), "one");
    map.insert(Index(2), "two");

    assert_eq!(map.get(&Index(1)), Some(&"one"));
    assert_eq!(map.get(&Index(3)), None);
}

#[test]
fn test_index_slice_cast() {
    // Raw index buffers are reinterpreted without copying.
    let raw = [0u32, 1, 2];
    let indices: &[Index] = bytemuck::cast_slice(&raw);
    assert_eq!(indices, &[Index(0), Index(1), Index(2)]);
}
