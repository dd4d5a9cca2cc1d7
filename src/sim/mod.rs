//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One explicit state aggregate, no statics
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod difficulty;
pub mod events;
pub mod order;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use catalog::{IngredientKind, RECIPES, Recipe};
pub use collision::{Rect, catch_band};
pub use difficulty::Difficulty;
pub use events::{EventQueue, GameEvent};
pub use order::CatchOutcome;
pub use state::{Catcher, GameState, Ingredient, OrderState, PlayerState, RunPhase, World};
pub use tick::{TickInput, tick};
