//! Overlap detection between axis-aligned entity boxes
//!
//! Entities are square boxes centered on their position. Overlap means
//! non-zero intersection area: all four half-plane comparisons are strict,
//! so boxes touching exactly at an edge or corner do not collide.

use glam::Vec2;

use super::state::Entity;

/// Whether two centered square boxes intersect with non-zero area
pub fn boxes_overlap(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    let a_half = a_size / 2.0;
    let b_half = b_size / 2.0;
    a_pos.x - a_half < b_pos.x + b_half
        && a_pos.x + a_half > b_pos.x - b_half
        && a_pos.y - a_half < b_pos.y + b_half
        && a_pos.y + a_half > b_pos.y - b_half
}

/// Whether two entities overlap
///
/// An entity never overlaps itself; the guard compares ids, so a snapshot
/// clone of an entity is also excluded against its live counterpart.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    if a.id == b.id {
        return false;
    }
    boxes_overlap(a.pos, a.size, b.pos, b.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;
    use proptest::prelude::*;

    fn food_at(id: u32, x: f32, y: f32, size: f32) -> Entity {
        Entity {
            id,
            kind: EntityKind::Food,
            pos: Vec2::new(x, y),
            size,
        }
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = food_at(1, 100.0, 100.0, 20.0);
        let b = food_at(2, 110.0, 105.0, 20.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_separated_boxes() {
        let a = food_at(1, 100.0, 100.0, 20.0);
        let b = food_at(2, 200.0, 100.0, 20.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // a's right edge sits exactly on b's left edge: zero-area contact
        let a = food_at(1, 100.0, 100.0, 20.0);
        let b = food_at(2, 120.0, 100.0, 20.0);
        assert!(!overlaps(&a, &b));

        // Same along y
        let c = food_at(3, 100.0, 120.0, 20.0);
        assert!(!overlaps(&a, &c));

        // Corner-to-corner contact
        let d = food_at(4, 120.0, 120.0, 20.0);
        assert!(!overlaps(&a, &d));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let big = food_at(1, 100.0, 100.0, 50.0);
        let small = food_at(2, 105.0, 95.0, 4.0);
        assert!(overlaps(&big, &small));
    }

    #[test]
    fn test_entity_never_overlaps_itself() {
        let a = food_at(1, 100.0, 100.0, 20.0);
        assert!(!overlaps(&a, &a));

        // A clone carries the same id and is excluded too
        let snapshot = a.clone();
        assert!(!overlaps(&a, &snapshot));
    }

    #[test]
    fn test_different_sizes() {
        // Player-sized box against food-sized box, 14px apart:
        // half-extents 5 + 10 = 15 > 14, so they overlap
        let a = food_at(1, 100.0, 100.0, 10.0);
        let b = food_at(2, 114.0, 100.0, 20.0);
        assert!(overlaps(&a, &b));

        // 15px apart is exact edge contact
        let c = food_at(3, 115.0, 100.0, 20.0);
        assert!(!overlaps(&a, &c));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            a_size in 1.0f32..100.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            b_size in 1.0f32..100.0,
        ) {
            let a = food_at(1, ax, ay, a_size);
            let b = food_at(2, bx, by, b_size);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
