//! Per-frame simulation tick
//!
//! Order of work inside a running tick: catcher movement, timers, spawning,
//! physics, then one catch band tested against every ingredient.

use super::autopilot;
use super::collision::catch_band;
use super::events::GameEvent;
use super::order::{self, CatchOutcome};
use super::physics;
use super::spawner;
use super::state::{GameState, RunPhase};
use crate::consts::*;

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement intents
    pub move_left: bool,
    pub move_right: bool,
    /// One-shot intents (edge triggered)
    pub toggle_pause: bool,
    pub toggle_mute: bool,
    /// Start a new run (also starts the first one)
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the game state by `dt` seconds of wall-clock time
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    let input = if input.autopilot {
        autopilot::drive(state, input)
    } else {
        input.clone()
    };

    if input.restart {
        state.start_run();
    }

    if input.toggle_mute {
        state.muted = !state.muted;
        state.emit(GameEvent::MuteToggled { muted: state.muted });
    }

    if input.toggle_pause {
        match state.phase {
            RunPhase::Playing | RunPhase::OrderCompleteFreeze => {
                state.phase = RunPhase::Paused;
                // Delayed cues don't survive a pause
                state.events.cancel_pending(state.clock);
                state.emit(GameEvent::PauseToggled { paused: true });
                return;
            }
            RunPhase::Paused => {
                state.phase = if state.freeze_timer > 0.0 {
                    RunPhase::OrderCompleteFreeze
                } else {
                    RunPhase::Playing
                };
                state.emit(GameEvent::PauseToggled { paused: false });
            }
            _ => {}
        }
    }

    // Paused input is dropped so the catcher doesn't drift on resume
    if !state.phase.is_running() {
        return;
    }

    state.clock += dt as f64;

    let direction = match (input.move_left, input.move_right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    if direction != 0.0 {
        let world = state.world;
        state.catcher.steer(direction, dt, &world);
    }

    // Slow motion scales physics and spawn timing only
    let sim_dt = dt * state.time_scale();
    if state.slow_mo_timer > 0.0 {
        state.slow_mo_timer = (state.slow_mo_timer - dt).max(0.0);
    }

    if state.phase == RunPhase::OrderCompleteFreeze {
        state.freeze_timer -= dt;
        if state.freeze_timer <= 0.0 {
            state.freeze_timer = 0.0;
            state.phase = RunPhase::Playing;
            state.next_order();
        }
    }

    if state.phase == RunPhase::Playing {
        spawner::update(state, sim_dt);
    }

    physics::step(&mut state.ingredients, &state.world, sim_dt);

    if state.phase == RunPhase::Playing {
        resolve_catches(state);
    }
}

/// Test every airborne ingredient against one catch band and route hits,
/// in spawn order, through the order state machine
fn resolve_catches(state: &mut GameState) {
    let band = catch_band(&state.world, &state.catcher, &state.order);
    let hits: Vec<usize> = state
        .ingredients
        .iter()
        .enumerate()
        .filter(|(_, i)| i.bounds().overlaps(&band))
        .map(|(idx, _)| idx)
        .collect();
    if hits.is_empty() {
        return;
    }

    let mut caught = vec![false; state.ingredients.len()];
    for idx in hits {
        let ingredient = state.ingredients[idx].clone();
        let outcome: CatchOutcome = order::resolve_catch(state, &ingredient);
        caught[idx] = true;
        if outcome.halts_catching() {
            break;
        }
    }

    let mut flags = caught.into_iter();
    state
        .ingredients
        .retain(|_| !flags.next().unwrap_or(false));
}
