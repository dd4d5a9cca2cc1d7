//! Order state machine: what a catch does to score, lives and progress
//!
//! Each caught ingredient resolves to exactly one [`CatchOutcome`], checked
//! in priority order: rotten, golden, match, mismatch.

use super::events::GameEvent;
use super::state::{GameState, Ingredient, RunPhase};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// Hazard caught: penalty and a lost life
    Rotten { game_over: bool },
    /// Wildcard bonus: extra life, points, slow motion
    Golden,
    /// Expected ingredient stacked
    Match { order_complete: bool, level_up: bool },
    /// Wrong ingredient: penalty, combo broken
    Mismatch,
}

impl CatchOutcome {
    /// Whether the outcome ends evaluation of further catches this tick
    pub fn halts_catching(&self) -> bool {
        matches!(
            self,
            CatchOutcome::Rotten { game_over: true }
                | CatchOutcome::Match {
                    order_complete: true,
                    ..
                }
        )
    }
}

/// Classify a catch without touching state
pub fn classify(state: &GameState, ingredient: &Ingredient) -> CatchOutcome {
    if ingredient.rotten {
        CatchOutcome::Rotten {
            game_over: state.player.lives <= 1,
        }
    } else if ingredient.kind.is_golden() {
        CatchOutcome::Golden
    } else if state.expected() == Some(ingredient.kind) {
        CatchOutcome::Match {
            order_complete: state.order.remaining() == 1,
            level_up: false,
        }
    } else {
        CatchOutcome::Mismatch
    }
}

/// Apply a caught ingredient to the game state
pub fn resolve_catch(state: &mut GameState, ingredient: &Ingredient) -> CatchOutcome {
    let outcome = classify(state, ingredient);
    match outcome {
        CatchOutcome::Rotten { .. } => apply_rotten(state),
        CatchOutcome::Golden => apply_golden(state),
        CatchOutcome::Match { .. } => apply_match(state, ingredient),
        CatchOutcome::Mismatch => apply_mismatch(state),
    }
}

fn apply_rotten(state: &mut GameState) -> CatchOutcome {
    state.player.penalize(ROTTEN_PENALTY);
    state.player.break_combo();
    state.player.lose_life();
    state.emit(GameEvent::CatchRotten);
    log::debug!("Rotten catch, lives left: {}", state.player.lives);

    let game_over = state.player.lives == 0;
    if game_over {
        enter_game_over(state);
    }
    CatchOutcome::Rotten { game_over }
}

fn apply_golden(state: &mut GameState) -> CatchOutcome {
    state.player.gain_life();
    state.player.score += GOLDEN_SCORE;
    state.slow_mo_timer = SLOW_MO_SECS;
    state.emit(GameEvent::CatchGolden);
    log::debug!("Golden catch, lives: {}", state.player.lives);
    CatchOutcome::Golden
}

fn apply_match(state: &mut GameState, ingredient: &Ingredient) -> CatchOutcome {
    let player = &mut state.player;
    player.combo += 1;
    player.streak += 1;
    player.score += MATCH_SCORE + player.combo as u64 * MATCH_SCORE_PER_COMBO;
    let combo = player.combo;

    let order_complete = state.order.advance(ingredient.kind);
    state.emit(GameEvent::CatchMatch { combo });

    let mut level_up = false;
    if order_complete {
        level_up = complete_order(state);
    }
    CatchOutcome::Match {
        order_complete,
        level_up,
    }
}

fn apply_mismatch(state: &mut GameState) -> CatchOutcome {
    state.player.penalize(MISMATCH_PENALTY);
    state.player.break_combo();
    state.emit(GameEvent::CatchMismatch);
    state
        .events
        .push_at(state.clock + MISMATCH_ECHO_DELAY, GameEvent::MismatchEcho);
    CatchOutcome::Mismatch
}

/// Award the completion bonus, maybe level up, and start the freeze.
/// Returns whether the level went up.
fn complete_order(state: &mut GameState) -> bool {
    let player = &mut state.player;
    let bonus = ORDER_COMPLETE_SCORE
        + (player.combo as u64 * ORDER_COMBO_BONUS_PER_COMBO).min(ORDER_COMBO_BONUS_CAP);
    player.score += bonus;

    // At most one level per order, however far past the threshold
    let level_up = player.score > player.level as u64 * LEVEL_SCORE_THRESHOLD;
    if level_up {
        player.level += 1;
    }
    let level = player.level;

    let recipe = state.order.recipe().name.to_string();
    log::info!(
        "Order complete: {} (+{}), score {}",
        recipe,
        bonus,
        state.player.score
    );
    state.emit(GameEvent::OrderComplete { recipe });
    if level_up {
        log::info!("Level up: {}", level);
        state.emit(GameEvent::LevelUp { level });
    }

    state.phase = RunPhase::OrderCompleteFreeze;
    state.freeze_timer = ORDER_FREEZE_SECS;
    level_up
}

/// End the run and record a new best score
pub fn enter_game_over(state: &mut GameState) {
    state.phase = RunPhase::GameOver;
    state.freeze_timer = 0.0;
    state.slow_mo_timer = 0.0;
    // Cues still waiting would fire into the next run
    state.events.cancel_pending(state.clock);
    let score = state.player.score;
    log::info!("Game over, final score {}", score);
    state.emit(GameEvent::GameOver { score });
    if score > state.player.best_score {
        state.player.best_score = score;
        log::info!("New best score: {}", score);
        state.emit(GameEvent::NewBestScore { score });
    }
}
