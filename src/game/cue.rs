use super::constants::{TICK_CLIP, WHOOSH_CLIP};
use super::ring::{BodyPart, Color, Marker};
use smallvec::{smallvec, SmallVec};

/// Semantic name of a clip in the audio bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Tick,
    Whoosh,
    Color(Color),
    Part(BodyPart),
}

impl Cue {
    pub const ALL: [Cue; 10] = [
        Cue::Tick,
        Cue::Whoosh,
        Cue::Part(BodyPart::RightHand),
        Cue::Part(BodyPart::LeftHand),
        Cue::Part(BodyPart::RightFoot),
        Cue::Part(BodyPart::LeftFoot),
        Cue::Color(Color::Blue),
        Cue::Color(Color::Yellow),
        Cue::Color(Color::Green),
        Cue::Color(Color::Red),
    ];

    pub fn clip_path(self) -> &'static str {
        match self {
            Cue::Tick => TICK_CLIP,
            Cue::Whoosh => WHOOSH_CLIP,
            Cue::Color(c) => c.clip_path(),
            Cue::Part(p) => p.clip_path(),
        }
    }
}

/// Clips announcing a landing, in playback order: body part, then color.
pub fn announcement(marker: &Marker) -> SmallVec<[Cue; 2]> {
    smallvec![Cue::Part(marker.body_part), Cue::Color(marker.color)]
}
