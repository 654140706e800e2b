//! Linear lookups and filters over a recipe collection.

use crate::recipe::Recipe;

/// Cooking time cutoff for [`quick_recipes`] when none is given.
pub const DEFAULT_QUICK_TIME: f64 = 30.0;

/// Recipes that cook in `max_time` minutes or less, in collection order.
pub fn quick_recipes(recipes: &[Recipe], max_time: f64) -> Vec<&Recipe> {
    recipes
        .iter()
        .filter(|r| r.cooking_time() <= max_time)
        .collect()
}

/// First recipe whose name matches exactly.
pub fn find_by_name<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|r| r.name() == name)
}

/// The recipe with `id`, if present.
pub fn find_by_id(recipes: &[Recipe], id: u64) -> Option<&Recipe> {
    recipes.iter().find(|r| r.id() == id)
}

/// Index of the recipe with `id` within the collection.
pub fn position_of(recipes: &[Recipe], id: u64) -> Option<usize> {
    recipes.iter().position(|r| r.id() == id)
}
