//! Catch zone geometry and collision
//!
//! The catch band is not static: it rides on top of the burger being built,
//! so it rises with every stacked layer, and it widens when the top bun is
//! the next thing the order needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::IngredientKind;
use super::state::{Catcher, OrderState, World};
use crate::consts::*;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Strict overlap on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Height a stacked layer adds to the burger
pub fn layer_height(kind: IngredientKind) -> f32 {
    match kind {
        IngredientKind::TopBun => TOP_BUN_LAYER_HEIGHT,
        _ => LAYER_HEIGHT,
    }
}

/// Y of the surface the next layer lands on
pub fn stack_surface_y(world: &World, stack: &[IngredientKind]) -> f32 {
    let bun_top = world.plate_y() - BOTTOM_BUN_OFFSET;
    bun_top - stack.iter().map(|&k| layer_height(k)).sum::<f32>()
}

/// Horizontal extent of the band for the given expected kind
pub fn band_width(catcher_width: f32, expected: Option<IngredientKind>) -> f32 {
    let inset = if expected == Some(IngredientKind::TopBun) {
        CATCH_BAND_INSET_TOP_BUN
    } else {
        CATCH_BAND_INSET
    };
    (catcher_width - inset).max(0.0)
}

/// The rectangle a falling ingredient must overlap to be caught
pub fn catch_band(world: &World, catcher: &Catcher, order: &OrderState) -> Rect {
    let surface = stack_surface_y(world, &order.stack);
    let width = band_width(catcher.width, order.expected());
    Rect::from_center(
        Vec2::new(catcher.x, surface),
        Vec2::new(width, CATCH_BAND_THICKNESS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::IngredientKind::*;

    #[test]
    fn test_overlap_requires_both_axes() {
        let band = Rect::from_center(Vec2::new(100.0, 100.0), Vec2::new(100.0, 12.0));
        let inside = Rect::from_center(Vec2::new(120.0, 95.0), Vec2::new(72.0, 24.0));
        let beside = Rect::from_center(Vec2::new(300.0, 100.0), Vec2::new(72.0, 24.0));
        let above = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(72.0, 24.0));
        assert!(band.overlaps(&inside));
        assert!(!band.overlaps(&beside));
        assert!(!band.overlaps(&above));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_band_rises_with_stack() {
        let world = World::new(800.0, 600.0);
        let catcher = Catcher::new(&world);
        let mut order = OrderState::new(0);

        let empty = catch_band(&world, &catcher, &order);
        assert_eq!(empty.center().y, world.plate_y() - BOTTOM_BUN_OFFSET);

        order.advance(Patty);
        let one = catch_band(&world, &catcher, &order);
        assert_eq!(one.center().y, empty.center().y - LAYER_HEIGHT);
        assert_eq!(one.height(), CATCH_BAND_THICKNESS);
        assert_eq!(one.center().x, catcher.x);
    }

    #[test]
    fn test_top_bun_layer_is_taller() {
        let world = World::default();
        let with_bun = stack_surface_y(&world, &[Patty, TopBun]);
        let with_cheese = stack_surface_y(&world, &[Patty, Cheese]);
        assert!(with_bun < with_cheese);
    }

    #[test]
    fn test_band_wider_for_top_bun() {
        let wide = band_width(CATCHER_WIDTH, Some(TopBun));
        for kind in IngredientKind::ORDINARY {
            if kind != TopBun {
                assert!(wide > band_width(CATCHER_WIDTH, Some(kind)));
            }
        }
        assert!(wide > band_width(CATCHER_WIDTH, None));
    }

    #[test]
    fn test_band_width_follows_expected() {
        let world = World::default();
        let catcher = Catcher::new(&world);
        let mut order = OrderState::new(0);
        order.advance(Patty);
        order.advance(Cheese);
        let band = catch_band(&world, &catcher, &order);
        assert_eq!(band.width(), CATCHER_WIDTH - CATCH_BAND_INSET_TOP_BUN);
    }
}
