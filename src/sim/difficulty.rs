//! Difficulty scaling by level

use super::catalog::{FULL_CATALOG_LEVEL, RECIPES, STARTER_RECIPES};
use crate::consts::*;

/// Per-level tuning consumed by the spawner and recipe draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Ordinary fall speed range: `min .. min + span`
    pub fall_speed_min: f32,
    pub fall_speed_span: f32,
    /// Number of leading catalog recipes in the draw pool
    pub recipe_pool: usize,
}

impl Difficulty {
    pub fn for_level(level: u32) -> Self {
        let level_f = level as f32;
        Self {
            spawn_interval: (BASE_SPAWN_INTERVAL - level_f * SPAWN_INTERVAL_PER_LEVEL)
                .max(MIN_SPAWN_INTERVAL),
            fall_speed_min: ORDINARY_FALL_SPEED_MIN,
            fall_speed_span: ORDINARY_FALL_SPEED_SPAN
                + level_f * ORDINARY_FALL_SPEED_SPAN_PER_LEVEL,
            recipe_pool: if level < FULL_CATALOG_LEVEL {
                STARTER_RECIPES
            } else {
                RECIPES.len()
            },
        }
    }
}
