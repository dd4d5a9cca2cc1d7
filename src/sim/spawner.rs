//! Ingredient spawning policy
//!
//! One random draw against a static cumulative-weight table picks the spawn
//! class; further draws pick the concrete kind, position and fall speed.

use rand::Rng;

use super::catalog::IngredientKind;
use super::difficulty::Difficulty;
use super::state::{GameState, Ingredient, OrderState, World};
use crate::consts::*;

/// What the weighted draw produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnClass {
    /// The kind the order needs next
    Expected,
    /// Any ordinary kind
    Uniform,
    /// A hazard disguised as an ordinary kind
    Rotten,
    Golden,
}

/// Class weights, cumulative. `Expected` must stay first so it can be
/// skipped when nothing is expected.
const SPAWN_TABLE: [(SpawnClass, u32); 4] = [
    (SpawnClass::Expected, 45),
    (SpawnClass::Uniform, 85),
    (SpawnClass::Rotten, 97),
    (SpawnClass::Golden, 100),
];

/// Map a roll in `[0, 100)` to a class
pub fn class_for_roll(roll: u32) -> SpawnClass {
    SPAWN_TABLE
        .iter()
        .find(|(_, upper)| roll < *upper)
        .map(|(class, _)| *class)
        .unwrap_or(SpawnClass::Golden)
}

/// Pick a spawn class; without an expected kind the draw covers only the
/// remaining rows
pub fn draw_class<R: Rng>(rng: &mut R, has_expected: bool) -> SpawnClass {
    let (_, total) = SPAWN_TABLE[SPAWN_TABLE.len() - 1];
    let floor = if has_expected { 0 } else { SPAWN_TABLE[0].1 };
    class_for_roll(rng.random_range(floor..total))
}

fn random_ordinary<R: Rng>(rng: &mut R) -> IngredientKind {
    IngredientKind::ORDINARY[rng.random_range(0..IngredientKind::ORDINARY.len())]
}

/// A decided spawn, before it gets an entity id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub kind: IngredientKind,
    pub rotten: bool,
    pub x: f32,
    pub vel_y: f32,
}

/// Decide kind, hazard flag, position and fall speed of one spawn
pub fn plan_spawn<R: Rng>(rng: &mut R, order: &OrderState, level: u32, world: &World) -> SpawnPlan {
    let expected = order.expected();
    let class = draw_class(rng, expected.is_some());

    let (mut kind, rotten) = match class {
        SpawnClass::Expected => (expected.unwrap_or(IngredientKind::Patty), false),
        SpawnClass::Uniform => (random_ordinary(rng), false),
        SpawnClass::Rotten => (random_ordinary(rng), true),
        SpawnClass::Golden => (IngredientKind::Golden, false),
    };

    // Keep top buns from clogging the screen early in an order
    if kind == IngredientKind::TopBun
        && expected != Some(IngredientKind::TopBun)
        && order.remaining() > 2
        && rng.random_bool(TOP_BUN_REROLL_CHANCE)
    {
        kind = IngredientKind::Cheese;
    }

    let min_x = SPAWN_EDGE_MARGIN;
    let max_x = world.width - SPAWN_EDGE_MARGIN;
    let x = if max_x > min_x {
        rng.random_range(min_x..=max_x)
    } else {
        world.width / 2.0
    };

    let vel_y = if rotten || kind.is_golden() {
        SPECIAL_FALL_SPEED_MIN + rng.random::<f32>() * SPECIAL_FALL_SPEED_SPAN
    } else {
        let difficulty = Difficulty::for_level(level);
        difficulty.fall_speed_min + rng.random::<f32>() * difficulty.fall_speed_span
    };

    SpawnPlan {
        kind,
        rotten,
        x,
        vel_y,
    }
}

/// Count the spawn timer down by `dt` (scaled) and spawn when it runs out.
/// Returns the id of the new ingredient, if any.
pub fn update(state: &mut GameState, dt: f32) -> Option<u32> {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return None;
    }
    state.spawn_timer = Difficulty::for_level(state.player.level).spawn_interval;

    let plan = plan_spawn(&mut state.rng, &state.order, state.player.level, &state.world);
    let id = state.next_entity_id();
    log::debug!(
        "Spawn #{} {:?}{} at x={:.0} vy={:.0}",
        id,
        plan.kind,
        if plan.rotten { " (rotten)" } else { "" },
        plan.x,
        plan.vel_y
    );
    state
        .ingredients
        .push(Ingredient::new(id, plan.kind, plan.x, plan.vel_y, plan.rotten));
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_table_boundaries() {
        assert_eq!(class_for_roll(0), SpawnClass::Expected);
        assert_eq!(class_for_roll(44), SpawnClass::Expected);
        assert_eq!(class_for_roll(45), SpawnClass::Uniform);
        assert_eq!(class_for_roll(84), SpawnClass::Uniform);
        assert_eq!(class_for_roll(85), SpawnClass::Rotten);
        assert_eq!(class_for_roll(96), SpawnClass::Rotten);
        assert_eq!(class_for_roll(97), SpawnClass::Golden);
        assert_eq!(class_for_roll(99), SpawnClass::Golden);
    }

    #[test]
    fn test_no_expected_never_draws_expected() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..2000 {
            assert_ne!(draw_class(&mut rng, false), SpawnClass::Expected);
        }
    }

    #[test]
    fn test_class_frequencies_roughly_match_weights() {
        let mut rng = Pcg32::seed_from_u64(42);
        let n = 20_000;
        let mut counts = [0u32; 4];
        for _ in 0..n {
            let idx = match draw_class(&mut rng, true) {
                SpawnClass::Expected => 0,
                SpawnClass::Uniform => 1,
                SpawnClass::Rotten => 2,
                SpawnClass::Golden => 3,
            };
            counts[idx] += 1;
        }
        let share = |c: u32| c as f32 / n as f32;
        assert!((share(counts[0]) - 0.45).abs() < 0.02);
        assert!((share(counts[1]) - 0.40).abs() < 0.02);
        assert!((share(counts[2]) - 0.12).abs() < 0.02);
        assert!((share(counts[3]) - 0.03).abs() < 0.01);
    }

    #[test]
    fn test_spawn_plan_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let world = World::new(800.0, 600.0);
        let order = OrderState::new(1);
        for level in [1, 4, 9] {
            for _ in 0..500 {
                let plan = plan_spawn(&mut rng, &order, level, &world);
                assert!(plan.x >= 40.0 && plan.x <= 760.0);
                if plan.rotten || plan.kind.is_golden() {
                    assert!(plan.vel_y >= 35.0 && plan.vel_y <= 85.0);
                } else {
                    let span = 140.0 + level as f32 * 18.0;
                    assert!(plan.vel_y >= 120.0 && plan.vel_y <= 120.0 + span);
                }
                assert!(!(plan.rotten && plan.kind.is_golden()));
            }
        }
    }

    #[test]
    fn test_narrow_world_spawns_at_center() {
        let mut rng = Pcg32::seed_from_u64(17);
        let world = World::new(60.0, 400.0);
        let order = OrderState::new(0);
        for _ in 0..200 {
            assert_eq!(plan_spawn(&mut rng, &order, 1, &world).x, 30.0);
        }
    }

    #[test]
    fn test_premature_top_bun_mostly_rerolled() {
        // Classic: six items, nothing stacked yet
        let order = OrderState::new(1);
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let mut top_buns = 0;
        let n = 20_000;
        for _ in 0..n {
            if plan_spawn(&mut rng, &order, 1, &world).kind == IngredientKind::TopBun {
                top_buns += 1;
            }
        }
        // Unfiltered share would be (40 + 12) / 9 ≈ 5.8%; filtered ≈ 0.6%
        assert!((top_buns as f32 / n as f32) < 0.015);
    }

    #[test]
    fn test_top_bun_allowed_near_completion() {
        // Cheeseburger with patty stacked: two remaining, top bun not rerolled
        let mut order = OrderState::new(0);
        order.advance(IngredientKind::Patty);
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut top_buns = 0;
        let n = 20_000;
        for _ in 0..n {
            if plan_spawn(&mut rng, &order, 1, &world).kind == IngredientKind::TopBun {
                top_buns += 1;
            }
        }
        assert!((top_buns as f32 / n as f32) > 0.04);
    }

    #[test]
    fn test_update_spawns_on_interval() {
        let mut state = GameState::new(8);
        state.start_run();
        assert!(update(&mut state, 0.016).is_some());
        assert_eq!(state.ingredients.len(), 1);
        assert!((state.spawn_timer - 0.88).abs() < 1e-5);
        assert!(update(&mut state, 0.5).is_none());
        assert!(update(&mut state, 0.4).is_some());
        assert_eq!(state.ingredients.len(), 2);
        assert!(state.ingredients[0].id < state.ingredients[1].id);
    }
}
