//! Ingredient kinds and the recipe catalog

use serde::{Deserialize, Serialize};

/// Ingredient variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientKind {
    Patty,
    Cheese,
    Lettuce,
    Tomato,
    Pickles,
    Ketchup,
    Mustard,
    Onion,
    TopBun,
    /// Wildcard bonus, never part of a recipe
    Golden,
}

impl IngredientKind {
    /// Every kind a recipe can ask for (everything but golden)
    pub const ORDINARY: [IngredientKind; 9] = [
        IngredientKind::Patty,
        IngredientKind::Cheese,
        IngredientKind::Lettuce,
        IngredientKind::Tomato,
        IngredientKind::Pickles,
        IngredientKind::Ketchup,
        IngredientKind::Mustard,
        IngredientKind::Onion,
        IngredientKind::TopBun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientKind::Patty => "Patty",
            IngredientKind::Cheese => "Cheese",
            IngredientKind::Lettuce => "Lettuce",
            IngredientKind::Tomato => "Tomato",
            IngredientKind::Pickles => "Pickles",
            IngredientKind::Ketchup => "Ketchup",
            IngredientKind::Mustard => "Mustard",
            IngredientKind::Onion => "Onion",
            IngredientKind::TopBun => "Top Bun",
            IngredientKind::Golden => "Golden",
        }
    }

    /// Display color for renderers (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            IngredientKind::Patty => "#6b3d2c",
            IngredientKind::Cheese => "#f4d03f",
            IngredientKind::Lettuce => "#2ecc71",
            IngredientKind::Tomato => "#e74c3c",
            IngredientKind::Pickles => "#27ae60",
            IngredientKind::Ketchup => "#c0392b",
            IngredientKind::Mustard => "#f1c40f",
            IngredientKind::Onion => "#ecf0f1",
            IngredientKind::TopBun => "#d5a253",
            IngredientKind::Golden => "#ffd700",
        }
    }

    pub fn is_golden(&self) -> bool {
        *self == IngredientKind::Golden
    }
}

/// A named burger build. The bottom bun is implicit; every sequence ends
/// with a top bun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub sequence: &'static [IngredientKind],
}

impl Recipe {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

use IngredientKind::*;

/// Recipe catalog, ordered by unlock: the first [`STARTER_RECIPES`] are
/// available from level 1, the rest from [`FULL_CATALOG_LEVEL`].
pub const RECIPES: [Recipe; 5] = [
    Recipe {
        name: "Cheeseburger",
        sequence: &[Patty, Cheese, TopBun],
    },
    Recipe {
        name: "Classic",
        sequence: &[Patty, Cheese, Lettuce, Tomato, Ketchup, TopBun],
    },
    Recipe {
        name: "Double",
        sequence: &[Patty, Cheese, Patty, Cheese, TopBun],
    },
    Recipe {
        name: "Garden Bite",
        sequence: &[Patty, Lettuce, Tomato, Onion, Mustard, TopBun],
    },
    Recipe {
        name: "Pickle Pop",
        sequence: &[Patty, Cheese, Pickles, Pickles, TopBun],
    },
];

pub const STARTER_RECIPES: usize = 3;
pub const FULL_CATALOG_LEVEL: u32 = 3;
