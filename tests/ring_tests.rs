// Host-side tests for the ring layout and landing decode.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod game {
    pub mod constants {
        include!("../src/game/constants.rs");
    }
    pub mod ring {
        include!("../src/game/ring.rs");
    }
}

use game::constants::*;
use game::ring::*;

#[test]
fn ring_has_sixteen_markers_mid_segment() {
    let ring = Ring::new();
    assert_eq!(ring.markers().len(), MARKER_COUNT);
    for (i, m) in ring.markers().iter().enumerate() {
        assert_eq!(m.index, i);
        let expected = i as f64 * 22.5 + 11.25;
        assert!((m.angle_deg - expected).abs() < 1e-9, "marker {i}: {}", m.angle_deg);
    }
    assert!((OFFSET_DEG - 11.25).abs() < 1e-12);
    assert!((SEGMENT_DEG - 22.5).abs() < 1e-12);
}

#[test]
fn body_part_follows_quadrant_table() {
    let ring = Ring::new();
    for m in ring.markers() {
        let expected = match m.index {
            0..=3 => BodyPart::RightFoot,
            4..=7 => BodyPart::LeftHand,
            8..=11 => BodyPart::RightHand,
            _ => BodyPart::LeftFoot,
        };
        assert_eq!(m.body_part, expected, "marker {}", m.index);
    }
}

#[test]
fn quadrant_boundaries_are_half_open() {
    assert_eq!(body_part_for_angle(0.0), BodyPart::RightFoot);
    assert_eq!(body_part_for_angle(89.999), BodyPart::RightFoot);
    assert_eq!(body_part_for_angle(90.0), BodyPart::LeftHand);
    assert_eq!(body_part_for_angle(180.0), BodyPart::RightHand);
    assert_eq!(body_part_for_angle(270.0), BodyPart::LeftFoot);
    assert_eq!(body_part_for_angle(359.999), BodyPart::LeftFoot);
    assert_eq!(body_part_for_angle(360.0), BodyPart::RightFoot);
    assert_eq!(body_part_for_angle(-45.0), BodyPart::LeftFoot);
}

#[test]
fn colors_cycle_every_four_markers() {
    let ring = Ring::new();
    let names: Vec<&str> = ring.markers().iter().map(|m| m.color.name()).collect();
    assert_eq!(&names[0..4], &["blue", "yellow", "green", "red"]);
    for (i, m) in ring.markers().iter().enumerate() {
        assert_eq!(m.color, ring.markers()[i % 4].color);
    }
}

#[test]
fn layout_is_identical_across_builds() {
    let a = Ring::new();
    let b = Ring::new();
    assert_eq!(a.markers(), b.markers());
}

#[test]
fn markers_sit_on_the_ring_inside_the_board() {
    let ring = Ring::new();
    for m in ring.markers() {
        assert!((m.offset.length() - RING_RADIUS).abs() < 1e-3);
        let tl = m.top_left();
        assert!(tl.x >= 0.0 && tl.x + 2.0 * MARKER_HALF_SIZE <= 2.0 * RING_CENTER[0]);
        assert!(tl.y >= 0.0 && tl.y + 2.0 * MARKER_HALF_SIZE <= 2.0 * RING_CENTER[1]);
    }
    // First marker is just below the +X axis (screen y grows downwards).
    let first = &ring.markers()[0];
    assert!(first.offset.x > 0.0 && first.offset.y > 0.0);
}

#[test]
fn landing_index_inverts_marker_angle() {
    for i in 0..MARKER_COUNT {
        assert_eq!(landing_index(marker_angle_deg(i)), i);
        assert_eq!(landing_index(marker_angle_deg(i) + 7.0 * 360.0), i);
    }
}

#[test]
fn landing_index_scenario_1878_75() {
    let target = 5.0 * 360.0 + 3.0 * 22.5 + 11.25;
    assert!((target - 1878.75_f64).abs() < 1e-12);
    assert!((normalize_deg(target) - 78.75).abs() < 1e-12);
    assert_eq!(landing_index(target), 3);
    let ring = Ring::new();
    let m = ring.landed(target);
    assert_eq!(m.index, 3);
    assert_eq!(m.body_part, BodyPart::RightFoot);
    assert_eq!(m.color, Color::Red);
}

#[test]
fn landing_index_handles_negative_and_boundary_angles() {
    assert_eq!(landing_index(-348.75), 0);
    assert_eq!(landing_index(-11.25), 15);
    // Right on the offset is the start of segment 0; just before it wraps to 15.
    assert_eq!(landing_index(11.25), 0);
    assert_eq!(landing_index(11.0), 15);
    assert_eq!(landing_index(0.0), 15);
}
