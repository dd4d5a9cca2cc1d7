//! Idle/demo mode - the game plays itself
//!
//! Derives movement intents from the current state, the same way a player
//! would: chase what the order needs (or a golden bonus), dodge rot.

use super::state::{GameState, Ingredient, RunPhase};
use super::tick::TickInput;

/// Ignore offsets smaller than this to avoid jitter
const DEAD_ZONE: f32 = 6.0;

/// Pick the ingredient worth catching: the lowest golden or expected item
/// that is still above the catch surface
fn target(state: &GameState) -> Option<&Ingredient> {
    let expected = state.expected();
    let plate_y = state.world.plate_y();
    state
        .ingredients
        .iter()
        .filter(|i| !i.rotten && i.pos.y < plate_y)
        .filter(|i| i.kind.is_golden() || Some(i.kind) == expected)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// Fill movement (and restart) intents for this tick
pub fn drive(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    input.move_left = false;
    input.move_right = false;

    match state.phase {
        RunPhase::Idle | RunPhase::GameOver => {
            input.restart = true;
            return input;
        }
        RunPhase::Paused => return input,
        _ => {}
    }

    let catcher = &state.catcher;
    let goal_x = if let Some(item) = target(state) {
        Some(item.pos.x)
    } else {
        // Nothing to chase: step away from rot falling onto the plate
        let half = catcher.width / 2.0;
        state
            .ingredients
            .iter()
            .filter(|i| i.rotten && (i.pos.x - catcher.x).abs() < half)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|rot| {
                if rot.pos.x >= catcher.x {
                    rot.pos.x - catcher.width
                } else {
                    rot.pos.x + catcher.width
                }
            })
    };

    if let Some(goal) = goal_x {
        let offset = goal - catcher.x;
        if offset < -DEAD_ZONE {
            input.move_left = true;
        } else if offset > DEAD_ZONE {
            input.move_right = true;
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::IngredientKind;

    fn playing() -> GameState {
        let mut state = GameState::new(4);
        state.start_run();
        state.order = crate::sim::OrderState::new(0);
        state
    }

    #[test]
    fn test_restarts_when_over() {
        let state = GameState::new(1);
        assert!(drive(&state, &TickInput::default()).restart);
    }

    #[test]
    fn test_chases_expected() {
        let mut state = playing();
        let id = state.next_entity_id();
        let x = state.catcher.x - 200.0;
        let mut patty = Ingredient::new(id, IngredientKind::Patty, x, 100.0, false);
        patty.pos.y = 100.0;
        state.ingredients.push(patty);
        let input = drive(&state, &TickInput::default());
        assert!(input.move_left && !input.move_right);
    }

    #[test]
    fn test_ignores_wrong_kind_and_dodges_rot() {
        let mut state = playing();
        let id = state.next_entity_id();
        let x = state.catcher.x + 200.0;
        let mut onion = Ingredient::new(id, IngredientKind::Onion, x, 100.0, false);
        onion.pos.y = 100.0;
        state.ingredients.push(onion);
        let id = state.next_entity_id();
        let x = state.catcher.x + 10.0;
        let mut rot = Ingredient::new(id, IngredientKind::Patty, x, 50.0, true);
        rot.pos.y = 200.0;
        state.ingredients.push(rot);
        let input = drive(&state, &TickInput::default());
        assert!(input.move_left);
    }
}
