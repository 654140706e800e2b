//! Create command - prompt for a new recipe and store it.

use std::io::{BufRead, Write};

use recipebook::{Recipe, RecipeStore};
use tracing::info;

use crate::display;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    store: &impl RecipeStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), Box<dyn std::error::Error>> {
    let answers = prompt.recipe_info()?;
    let recipe = Recipe::new(answers.name, answers.cooking_time, Some(answers.servings))?;

    let id = recipe.id();
    let name = recipe.name().to_string();
    store.insert(recipe)?;
    info!(id, "Created recipe");

    display::success(&format!("Recipe \"{}\" created with ID: {}", name, id));
    Ok(())
}
