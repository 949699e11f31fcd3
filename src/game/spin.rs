use super::constants::*;
use rand::Rng;

/// A sampled spin: whole turns plus the segment the needle should stop on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub turns: u32,
    pub segment: usize,
    pub target_deg: f64,
}

impl SpinPlan {
    pub fn new(turns: u32, segment: usize) -> Self {
        Self {
            turns,
            segment,
            target_deg: target_angle_deg(turns, segment),
        }
    }

    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let turns = rng.gen_range(MIN_TURNS..=MAX_TURNS);
        let segment = rng.gen_range(0..MARKER_COUNT);
        Self::new(turns, segment)
    }
}

/// Absolute needle rotation for `turns` full turns ending mid-segment.
#[inline]
pub fn target_angle_deg(turns: u32, segment: usize) -> f64 {
    turns as f64 * 360.0 + segment as f64 * SEGMENT_DEG + OFFSET_DEG
}

/// CSS transform that places the needle at `angle_deg`.
#[inline]
pub fn needle_transform(angle_deg: f64) -> String {
    format!("translate(-50%, -50%) rotate({}deg)", angle_deg)
}

#[inline]
pub fn needle_transition(duration_ms: u32) -> String {
    format!("transform {}s {}", duration_ms as f64 / 1000.0, SPIN_EASING)
}
