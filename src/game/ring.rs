use super::constants::*;
use glam::Vec2;
use std::fmt;

/// Marker color, cycled around the ring by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Yellow,
    Green,
    Red,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Green, Color::Red];

    /// CSS color name, also used as the clip file stem.
    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Red => "red",
        }
    }

    pub fn clip_path(self) -> &'static str {
        match self {
            Color::Blue => "sounds/blue.wav",
            Color::Yellow => "sounds/yellow.wav",
            Color::Green => "sounds/green.wav",
            Color::Red => "sounds/red.wav",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    RightHand,
    LeftHand,
    RightFoot,
    LeftFoot,
}

impl BodyPart {
    pub const ALL: [BodyPart; 4] = [
        BodyPart::RightHand,
        BodyPart::LeftHand,
        BodyPart::RightFoot,
        BodyPart::LeftFoot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BodyPart::RightHand => "right hand",
            BodyPart::LeftHand => "left hand",
            BodyPart::RightFoot => "right foot",
            BodyPart::LeftFoot => "left foot",
        }
    }

    pub fn clip_path(self) -> &'static str {
        match self {
            BodyPart::RightHand => "sounds/right-hand.wav",
            BodyPart::LeftHand => "sounds/left-hand.wav",
            BodyPart::RightFoot => "sounds/right-foot.wav",
            BodyPart::LeftFoot => "sounds/left-foot.wav",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quadrant -> body part. Screen angles grow clockwise from +X, so quadrant 0
/// is the lower right of the board. The assignment is kept as players know it
/// even though it is mirrored relative to the physical mat.
pub const QUADRANT_PARTS: [BodyPart; 4] = [
    BodyPart::RightFoot,
    BodyPart::LeftHand,
    BodyPart::RightHand,
    BodyPart::LeftFoot,
];

/// One fixed ring position.
///
/// Fields:
/// - `index`: position in the ring, 0..MARKER_COUNT
/// - `angle_deg`: center angle of the marker's segment, in [0, 360)
/// - `offset`: Cartesian offset from the ring center in board pixels
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub angle_deg: f64,
    pub color: Color,
    pub body_part: BodyPart,
    pub offset: Vec2,
}

impl Marker {
    /// Top-left corner of the marker's box inside the board.
    pub fn top_left(&self) -> Vec2 {
        Vec2::from(RING_CENTER) + self.offset - Vec2::splat(MARKER_HALF_SIZE)
    }
}

#[inline]
pub fn marker_angle_deg(index: usize) -> f64 {
    (index as f64 * SEGMENT_DEG + OFFSET_DEG).rem_euclid(360.0)
}

#[inline]
pub fn color_for_index(index: usize) -> Color {
    Color::ALL[index % Color::ALL.len()]
}

#[inline]
pub fn body_part_for_angle(angle_deg: f64) -> BodyPart {
    let quadrant = (normalize_deg(angle_deg) / QUADRANT_DEG).floor() as usize;
    QUADRANT_PARTS[quadrant.min(QUADRANT_PARTS.len() - 1)]
}

/// Wrap any angle into [0, 360).
#[inline]
pub fn normalize_deg(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Index of the marker a needle rotated by `target_deg` points at.
///
/// Inverse of the layout: strip whole turns, remove the half-segment offset
/// and bucket by segment width.
pub fn landing_index(target_deg: f64) -> usize {
    let within = (normalize_deg(target_deg) - OFFSET_DEG).rem_euclid(360.0);
    ((within / SEGMENT_DEG).floor() as usize) % MARKER_COUNT
}

/// The fixed ring of markers, built once per page.
#[derive(Clone, Debug)]
pub struct Ring {
    markers: Vec<Marker>,
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

impl Ring {
    pub fn new() -> Self {
        let markers = (0..MARKER_COUNT)
            .map(|index| {
                let angle_deg = marker_angle_deg(index);
                let rad = angle_deg.to_radians() as f32;
                Marker {
                    index,
                    angle_deg,
                    color: color_for_index(index),
                    body_part: body_part_for_angle(angle_deg),
                    offset: Vec2::new(rad.cos(), rad.sin()) * RING_RADIUS,
                }
            })
            .collect();
        Self { markers }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Marker under the needle after a rotation of `target_deg`.
    pub fn landed(&self, target_deg: f64) -> &Marker {
        &self.markers[landing_index(target_deg)]
    }
}
