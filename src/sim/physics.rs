//! Entity store physics: gravity integration and off-screen pruning

use super::state::{Ingredient, World};
use crate::consts::*;

/// Advance one ingredient by `dt` (already time-scaled)
pub fn integrate(ingredient: &mut Ingredient, dt: f32) {
    let gravity_scale = if ingredient.is_special() {
        GRAVITY_SCALE_SPECIAL
    } else {
        GRAVITY_SCALE_ORDINARY
    };
    ingredient.vel_y += GRAVITY * dt * gravity_scale;
    ingredient.pos.y += ingredient.vel_y * dt;

    if ingredient.rotten {
        ingredient.wobble_phase =
            (ingredient.wobble_phase + ROTTEN_WOBBLE_RATE * dt) % std::f32::consts::TAU;
        ingredient.wobble = ingredient.wobble_phase.sin() * ROTTEN_WOBBLE_MAX;
    }
}

/// True once the item has fallen past the bottom edge plus margin
pub fn is_offscreen(ingredient: &Ingredient, world: &World) -> bool {
    ingredient.pos.y - INGREDIENT_HEIGHT / 2.0 > world.height + OFFSCREEN_MARGIN
}

/// Advance every ingredient and drop the ones that left the world.
/// Misses carry no penalty. Returns how many were retired.
pub fn step(ingredients: &mut Vec<Ingredient>, world: &World, dt: f32) -> usize {
    for ingredient in ingredients.iter_mut() {
        integrate(ingredient, dt);
    }
    let before = ingredients.len();
    ingredients.retain(|i| !is_offscreen(i, world));
    before - ingredients.len()
}
