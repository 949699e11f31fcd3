pub mod constants;
pub mod cue;
pub mod params;
pub mod ring;
pub mod round;
pub mod session;
pub mod spin;

pub use constants::*;
pub use cue::*;
pub use params::*;
pub use ring::*;
pub use round::*;
pub use session::*;
pub use spin::*;
