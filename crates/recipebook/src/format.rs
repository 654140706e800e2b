//! Human-readable text for recipes.

use std::fmt;

use crate::recipe::Recipe;

/// Minutes of cooking time per serving.
///
/// Hand-edited data can carry zero servings; that is treated as one serving.
pub fn time_per_serving(recipe: &Recipe) -> f64 {
    let servings = recipe.servings().max(1);
    recipe.cooking_time() / f64::from(servings)
}

/// Numbered steps, one per line: `"1. Boil water\n2. Add pasta\n"`.
pub fn steps_list(recipe: &Recipe) -> String {
    if recipe.steps().is_empty() {
        return "No steps added yet".to_string();
    }

    recipe
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}\n", i + 1, step))
        .collect()
}

/// Ingredient lines: `"- 2 cups of Flour\n"`.
pub fn ingredients_list(recipe: &Recipe) -> String {
    if recipe.ingredients().is_empty() {
        return "No ingredients added yet".to_string();
    }

    recipe
        .ingredients()
        .iter()
        .map(|ing| format!("- {} {} of {}\n", ing.amount, ing.unit, ing.name))
        .collect()
}

/// The full printable block: header, timings, ingredients, then steps.
pub fn format_recipe(recipe: &Recipe) -> String {
    format!(
        "{} for {} people\n\
         Cooking time: {} minutes\n\
         Time per serving: {:.1} minutes\n\
         \n\
         Ingredients:\n\
         {}\n\
         \n\
         Steps:\n\
         {}",
        recipe.name(),
        recipe.servings(),
        recipe.cooking_time(),
        time_per_serving(recipe),
        ingredients_list(recipe).trim_end(),
        steps_list(recipe).trim_end(),
    )
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_recipe(self))
    }
}
