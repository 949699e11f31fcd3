/// Page element ids, selectors and CSS class names the frontend binds to.
///
/// These must match `index.html`.
// Elements
pub const BOARD_SELECTOR: &str = ".twister-board";
pub const NEEDLE_SELECTOR: &str = ".spinner-needle";
pub const TIMER_ID: &str = "timer";
pub const START_BUTTON_ID: &str = "startButton";
pub const END_BUTTON_ID: &str = "endButton";

// Classes
pub const DOT_CLASS: &str = "dot";
pub const EMPHASIZED_CLASS: &str = "countdown-zoom";
pub const PLAIN_CLASS: &str = "timer-fixed";
pub const FULLSCREEN_CLASS: &str = "fullscreen";
