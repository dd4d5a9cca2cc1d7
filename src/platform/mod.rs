//! Platform glue
//!
//! Turns host events into simulation inputs:
//! - Key names to movement/pause/mute/restart intents
//! - Frame timestamps to clamped tick deltas

pub mod input;
pub mod time;

pub use input::{Intent, InputState, KeyMap};
pub use time::FrameClock;
