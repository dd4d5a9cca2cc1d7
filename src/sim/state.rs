//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{IngredientKind, RECIPES, Recipe};
use super::collision::Rect;
use super::difficulty::Difficulty;
use super::events::{EventQueue, GameEvent};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Playing,
    /// Simulation frozen, state preserved
    Paused,
    /// Order finished; spawning and catching suspended while the stack blinks
    OrderCompleteFreeze,
    /// Lives ran out
    GameOver,
}

impl RunPhase {
    /// Whether the simulation advances in this phase
    pub fn is_running(&self) -> bool {
        matches!(self, RunPhase::Playing | RunPhase::OrderCompleteFreeze)
    }
}

/// Logical world dimensions (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Y of the top of the catcher's plate
    pub fn plate_y(&self) -> f32 {
        (self.height - PLATE_BOTTOM_MARGIN).min(self.height * PLATE_HEIGHT_FRACTION)
    }
}

/// A falling ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub kind: IngredientKind,
    /// Center of the bounding box
    pub pos: Vec2,
    /// Downward speed (px/s)
    pub vel_y: f32,
    /// Hazard disguised as `kind`
    pub rotten: bool,
    /// Cosmetic tilt (radians), rotten only
    #[serde(default)]
    pub wobble: f32,
    #[serde(default)]
    pub wobble_phase: f32,
}

impl Ingredient {
    pub fn new(id: u32, kind: IngredientKind, x: f32, vel_y: f32, rotten: bool) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, -INGREDIENT_HEIGHT),
            vel_y,
            rotten: rotten && !kind.is_golden(),
            wobble: 0.0,
            wobble_phase: 0.0,
        }
    }

    /// Golden and rotten items fall slower and on a gentler arc
    pub fn is_special(&self) -> bool {
        self.rotten || self.kind.is_golden()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(INGREDIENT_WIDTH, INGREDIENT_HEIGHT))
    }
}

/// The player's catcher (plate with the bottom bun on it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catcher {
    /// Horizontal center
    pub x: f32,
    pub width: f32,
    /// Horizontal speed (px/s)
    pub speed: f32,
}

impl Catcher {
    pub fn new(world: &World) -> Self {
        let mut catcher = Self {
            x: (world.width / 2.0).floor(),
            width: CATCHER_WIDTH,
            speed: CATCHER_SPEED,
        };
        catcher.clamp_to(world);
        catcher
    }

    /// Move by `direction * speed * dt`, staying inside the world
    pub fn steer(&mut self, direction: f32, dt: f32, world: &World) {
        self.x += direction * self.speed * dt;
        self.clamp_to(world);
    }

    pub fn clamp_to(&mut self, world: &World) {
        let half = self.width / 2.0;
        let max = (world.width - half).max(half);
        self.x = self.x.clamp(half, max);
    }
}

/// Progress through the current recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderState {
    /// Index into [`RECIPES`]
    pub recipe_index: usize,
    /// Number of items matched so far; always equals `stack.len()`
    pub progress: usize,
    /// Caught layers, bottom first
    pub stack: Vec<IngredientKind>,
}

impl OrderState {
    pub fn new(recipe_index: usize) -> Self {
        Self {
            recipe_index: recipe_index.min(RECIPES.len() - 1),
            progress: 0,
            stack: Vec::new(),
        }
    }

    pub fn recipe(&self) -> &'static Recipe {
        &RECIPES[self.recipe_index]
    }

    /// Next kind the order needs, `None` once complete
    pub fn expected(&self) -> Option<IngredientKind> {
        self.recipe().sequence.get(self.progress).copied()
    }

    pub fn remaining(&self) -> usize {
        self.recipe().len() - self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.recipe().len()
    }

    /// Stack a matched layer. Returns true if the order is now complete.
    pub fn advance(&mut self, kind: IngredientKind) -> bool {
        if !self.is_complete() {
            self.stack.push(kind);
            self.progress = self.stack.len();
        }
        self.is_complete()
    }
}

/// Score, lives and progression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub combo: u32,
    pub streak: u32,
    pub best_score: u64,
}

impl PlayerState {
    pub fn new(best_score: u64) -> Self {
        Self {
            score: 0,
            lives: MAX_LIVES,
            level: 1,
            combo: 0,
            streak: 0,
            best_score,
        }
    }

    /// Subtract points, never going below zero
    pub fn penalize(&mut self, points: u64) {
        self.score = self.score.saturating_sub(points);
    }

    pub fn break_combo(&mut self) {
        self.combo = 0;
        self.streak = 0;
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub world: World,
    pub phase: RunPhase,
    pub player: PlayerState,
    pub order: OrderState,
    pub catcher: Catcher,
    /// Airborne ingredients (sorted by id)
    pub ingredients: Vec<Ingredient>,
    /// Seconds until the next spawn (scaled time)
    pub spawn_timer: f32,
    /// Seconds left in the order-complete freeze (real time)
    pub freeze_timer: f32,
    /// Seconds left in the golden slow motion (real time)
    pub slow_mo_timer: f32,
    /// Real seconds simulated while running
    pub clock: f64,
    pub muted: bool,
    pub events: EventQueue,
    next_id: u32,
}

impl GameState {
    /// Create an idle game in the default world
    pub fn new(seed: u64) -> Self {
        Self::with_world(seed, World::default())
    }

    pub fn with_world(seed: u64, world: World) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world,
            phase: RunPhase::Idle,
            player: PlayerState::new(0),
            order: OrderState::new(0),
            catcher: Catcher::new(&world),
            ingredients: Vec::new(),
            spawn_timer: 0.0,
            freeze_timer: 0.0,
            slow_mo_timer: 0.0,
            clock: 0.0,
            muted: false,
            events: EventQueue::new(),
            next_id: 1,
        }
    }

    /// Seed the best score (from persistence) before the first run
    pub fn with_best_score(mut self, best_score: u64) -> Self {
        self.player.best_score = best_score;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything but the best score and mute flag, and start playing
    pub fn start_run(&mut self) {
        let best_score = self.player.best_score;
        self.player = PlayerState::new(best_score);
        self.catcher = Catcher::new(&self.world);
        self.ingredients.clear();
        self.spawn_timer = 0.0;
        self.freeze_timer = 0.0;
        self.slow_mo_timer = 0.0;
        self.events.clear();
        self.phase = RunPhase::Playing;
        self.next_order();
        log::info!("Run started (seed {})", self.seed);
    }

    /// Draw a fresh recipe from the level's pool
    pub fn next_order(&mut self) {
        let pool = Difficulty::for_level(self.player.level).recipe_pool;
        let index = self.rng.random_range(0..pool);
        self.order = OrderState::new(index);
        let recipe = self.order.recipe().name.to_string();
        log::debug!("New order: {}", recipe);
        self.emit(GameEvent::OrderStarted { recipe });
    }

    pub fn expected(&self) -> Option<IngredientKind> {
        self.order.expected()
    }

    /// Multiplier applied to physics and spawn timing
    pub fn time_scale(&self) -> f32 {
        if self.slow_mo_timer > 0.0 {
            SLOW_MO_SCALE
        } else {
            1.0
        }
    }

    /// Change world size, keeping the catcher inside
    pub fn resize(&mut self, world: World) {
        self.world = world;
        self.catcher.clamp_to(&self.world);
    }

    /// Queue an event due now
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(self.clock, event);
    }

    /// Take every event that is due
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain_due(self.clock)
    }
}
