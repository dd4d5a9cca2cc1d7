//! Burger Blitz - A falling-ingredient burger stacking arcade game
//!
//! Core modules:
//! - `sim`: Simulation and rule engine (spawning, physics, catching, orders)
//! - `view`: Read-only view model and HUD snapshot for renderers
//! - `audio`: Procedural sound cues (Web Audio on wasm)
//! - `platform`: Key mapping and frame clock
//! - `persistence`: Primitive storage and best score
//! - `settings`: Audio preferences

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use persistence::{BestScore, MemoryStorage, Storage};
pub use settings::Settings;
pub use view::{HudSnapshot, ViewModel};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Default logical world size
    pub const DEFAULT_WORLD_WIDTH: f32 = 960.0;
    pub const DEFAULT_WORLD_HEIGHT: f32 = 640.0;

    /// Player lives
    pub const MAX_LIVES: u8 = 3;

    /// Catcher (plate + bottom bun)
    pub const CATCHER_WIDTH: f32 = 160.0;
    pub const CATCHER_SPEED: f32 = 520.0;
    /// Plate sits this far above the bottom edge, at most
    pub const PLATE_BOTTOM_MARGIN: f32 = 120.0;
    /// ...and never lower than this fraction of the world height
    pub const PLATE_HEIGHT_FRACTION: f32 = 0.82;

    /// Falling ingredient bounding box
    pub const INGREDIENT_WIDTH: f32 = 72.0;
    pub const INGREDIENT_HEIGHT: f32 = 24.0;

    /// Downward acceleration (px/s²), scaled per item class
    pub const GRAVITY: f32 = 980.0;
    pub const GRAVITY_SCALE_ORDINARY: f32 = 0.25;
    pub const GRAVITY_SCALE_SPECIAL: f32 = 0.14;
    /// Items are retired this far below the bottom edge
    pub const OFFSCREEN_MARGIN: f32 = 40.0;
    /// Rotten tilt amplitude (radians) and rate (radians/s of phase)
    pub const ROTTEN_WOBBLE_MAX: f32 = 0.3;
    pub const ROTTEN_WOBBLE_RATE: f32 = 9.0;

    /// Spawning
    pub const BASE_SPAWN_INTERVAL: f32 = 0.9;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.35;
    pub const SPAWN_INTERVAL_PER_LEVEL: f32 = 0.02;
    pub const SPAWN_EDGE_MARGIN: f32 = 40.0;
    pub const ORDINARY_FALL_SPEED_MIN: f32 = 120.0;
    pub const ORDINARY_FALL_SPEED_SPAN: f32 = 140.0;
    pub const ORDINARY_FALL_SPEED_SPAN_PER_LEVEL: f32 = 18.0;
    pub const SPECIAL_FALL_SPEED_MIN: f32 = 35.0;
    pub const SPECIAL_FALL_SPEED_SPAN: f32 = 50.0;
    /// Chance a premature top bun is swapped for cheese
    pub const TOP_BUN_REROLL_CHANCE: f64 = 0.9;

    /// Catch zone geometry
    pub const BOTTOM_BUN_OFFSET: f32 = 23.0;
    pub const LAYER_HEIGHT: f32 = 14.0;
    pub const TOP_BUN_LAYER_HEIGHT: f32 = 22.0;
    pub const CATCH_BAND_THICKNESS: f32 = 12.0;
    pub const CATCH_BAND_INSET: f32 = 48.0;
    pub const CATCH_BAND_INSET_TOP_BUN: f32 = 16.0;

    /// Scoring
    pub const MATCH_SCORE: u64 = 50;
    pub const MATCH_SCORE_PER_COMBO: u64 = 5;
    pub const ORDER_COMPLETE_SCORE: u64 = 150;
    pub const ORDER_COMBO_BONUS_PER_COMBO: u64 = 10;
    pub const ORDER_COMBO_BONUS_CAP: u64 = 200;
    pub const LEVEL_SCORE_THRESHOLD: u64 = 600;
    pub const MISMATCH_PENALTY: u64 = 15;
    pub const ROTTEN_PENALTY: u64 = 20;
    pub const GOLDEN_SCORE: u64 = 100;
    /// Streak is only shown from this length up
    pub const STREAK_DISPLAY_MIN: u32 = 3;

    /// Timers (real seconds)
    pub const ORDER_FREEZE_SECS: f32 = 0.9;
    pub const FREEZE_BLINK_SECS: f32 = 0.15;
    pub const SLOW_MO_SECS: f32 = 3.0;
    pub const SLOW_MO_SCALE: f32 = 0.5;
    /// Delay of the second buzz after a wrong catch
    pub const MISMATCH_ECHO_DELAY: f64 = 0.09;
}
