// Ring geometry, spin timing and asset paths shared by the game logic and the
// web frontend.

// Ring layout
pub const MARKER_COUNT: usize = 16;
pub const SEGMENT_DEG: f64 = 360.0 / MARKER_COUNT as f64; // 22.5
pub const OFFSET_DEG: f64 = SEGMENT_DEG / 2.0; // markers sit mid-segment
pub const QUADRANT_DEG: f64 = 90.0;

// Pixel geometry of the board (ring container is 400x400)
pub const RING_CENTER: [f32; 2] = [200.0, 200.0];
pub const RING_RADIUS: f32 = 160.0;
pub const MARKER_HALF_SIZE: f32 = 20.0;

// Spin
pub const MIN_TURNS: u32 = 5;
pub const MAX_TURNS: u32 = 8; // inclusive
pub const SPIN_DURATION_MS: u32 = 4000;
pub const SPIN_EASING: &str = "cubic-bezier(0.2, 0.8, 0.2, 1)";

// Announcement and countdown pacing
pub const ANNOUNCE_GAP_MS: u32 = 100;
pub const COUNTDOWN_STEP_MS: u32 = 1000;
pub const DEFAULT_INITIAL_COUNTDOWN: u32 = 5;
pub const DEFAULT_ROUND_COUNTDOWN: u32 = 10;

pub const READY_TEXT: &str = "Ready!";

// Clip locations, relative to the page
pub const TICK_CLIP: &str = "sounds/beep.wav";
pub const WHOOSH_CLIP: &str = "sounds/spin.wav";
