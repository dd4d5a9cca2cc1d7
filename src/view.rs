//! Read-only snapshots for renderers and the HUD
//!
//! Built from [`GameState`] after each tick; collaborators never write back.

use serde::Serialize;

use crate::consts::*;
use crate::sim::catalog::IngredientKind;
use crate::sim::collision::{Rect, catch_band};
use crate::sim::state::{GameState, RunPhase};

/// One falling ingredient as the renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct IngredientView {
    pub id: u32,
    pub kind: IngredientKind,
    pub label: &'static str,
    pub color: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotten: bool,
    pub wobble: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatcherView {
    pub x: f32,
    /// Top of the plate
    pub y: f32,
    pub width: f32,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub world_width: f32,
    pub world_height: f32,
    pub phase: RunPhase,
    pub catcher: CatcherView,
    pub ingredients: Vec<IngredientView>,
    /// Caught layers, bottom first
    pub stack: Vec<IngredientKind>,
    /// False on the "off" beats of the order-complete blink
    pub stack_visible: bool,
    /// Current catch band (debug highlight)
    pub catch_band: Rect,
    pub slow_motion: bool,
}

impl ViewModel {
    pub fn from_state(state: &GameState) -> Self {
        let ingredients = state
            .ingredients
            .iter()
            .map(|i| IngredientView {
                id: i.id,
                kind: i.kind,
                label: i.kind.label(),
                color: i.kind.color(),
                x: i.pos.x,
                y: i.pos.y,
                width: INGREDIENT_WIDTH,
                height: INGREDIENT_HEIGHT,
                rotten: i.rotten,
                wobble: i.wobble,
            })
            .collect();

        Self {
            world_width: state.world.width,
            world_height: state.world.height,
            phase: state.phase,
            catcher: CatcherView {
                x: state.catcher.x,
                y: state.world.plate_y(),
                width: state.catcher.width,
            },
            ingredients,
            stack: state.order.stack.clone(),
            stack_visible: stack_visible(state),
            catch_band: catch_band(&state.world, &state.catcher, &state.order),
            slow_motion: state.slow_mo_timer > 0.0,
        }
    }
}

/// Blink the finished burger while the freeze runs
fn stack_visible(state: &GameState) -> bool {
    if state.phase != RunPhase::OrderCompleteFreeze {
        return true;
    }
    let elapsed = (ORDER_FREEZE_SECS - state.freeze_timer).max(0.0);
    (elapsed / FREEZE_BLINK_SECS) as u32 % 2 == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    Done,
    Current,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub status: ItemStatus,
}

/// HUD values
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u8,
    pub max_lives: u8,
    pub level: u32,
    pub best_score: u64,
    /// Hidden until it is worth showing
    pub streak: Option<u32>,
    /// No order before the first run starts
    pub recipe: Option<&'static str>,
    pub checklist: Vec<ChecklistItem>,
    pub paused: bool,
    pub game_over: bool,
    pub muted: bool,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let order = &state.order;
        let idle = state.phase == RunPhase::Idle;
        let checklist = if idle {
            Vec::new()
        } else {
            order
                .recipe()
                .sequence
                .iter()
                .enumerate()
                .map(|(i, kind)| ChecklistItem {
                    label: kind.label(),
                    status: if i < order.progress {
                        ItemStatus::Done
                    } else if i == order.progress {
                        ItemStatus::Current
                    } else {
                        ItemStatus::Pending
                    },
                })
                .collect()
        };

        let player = &state.player;
        Self {
            score: player.score,
            lives: player.lives,
            max_lives: MAX_LIVES,
            level: player.level,
            best_score: player.best_score,
            streak: (player.streak >= STREAK_DISPLAY_MIN).then_some(player.streak),
            recipe: (!idle).then_some(order.recipe().name),
            checklist,
            paused: state.phase == RunPhase::Paused,
            game_over: state.phase == RunPhase::GameOver,
            muted: state.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::OrderState;
    use crate::sim::catalog::IngredientKind::*;

    fn playing() -> GameState {
        let mut state = GameState::new(10);
        state.start_run();
        state.order = OrderState::new(0);
        state
    }

    #[test]
    fn test_checklist_statuses() {
        let mut state = playing();
        state.order.advance(Patty);
        let hud = HudSnapshot::from_state(&state);
        let statuses: Vec<ItemStatus> = hud.checklist.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![ItemStatus::Done, ItemStatus::Current, ItemStatus::Pending]
        );
        assert_eq!(hud.recipe, Some("Cheeseburger"));
        assert_eq!(hud.checklist[2].label, "Top Bun");
    }

    #[test]
    fn test_no_order_shown_before_first_run() {
        let state = GameState::new(10);
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.recipe, None);
        assert!(hud.checklist.is_empty());
        assert!(!hud.game_over && !hud.paused);
    }

    #[test]
    fn test_streak_hidden_below_three() {
        let mut state = playing();
        state.player.streak = 2;
        assert_eq!(HudSnapshot::from_state(&state).streak, None);
        state.player.streak = 3;
        assert_eq!(HudSnapshot::from_state(&state).streak, Some(3));
    }

    #[test]
    fn test_stack_blinks_during_freeze() {
        let mut state = playing();
        assert!(ViewModel::from_state(&state).stack_visible);
        state.phase = RunPhase::OrderCompleteFreeze;
        state.freeze_timer = ORDER_FREEZE_SECS - 0.05;
        assert!(ViewModel::from_state(&state).stack_visible);
        state.freeze_timer = ORDER_FREEZE_SECS - 0.2;
        assert!(!ViewModel::from_state(&state).stack_visible);
    }

    #[test]
    fn test_view_serializes() {
        let mut state = playing();
        crate::sim::spawner::update(&mut state, 0.0);
        let view = ViewModel::from_state(&state);
        assert_eq!(view.ingredients.len(), 1);
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"catcher\""));
    }
}
