//! Add-ingredient command - prompt for an ingredient and append it.

use std::io::{BufRead, Write};

use recipebook::RecipeStore;
use tracing::info;

use crate::display;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    store: &impl RecipeStore,
    prompt: &mut Prompt<R, W>,
    id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store.find_by_id(id)?;
    let answers = prompt.ingredient()?;

    let message = format!("Added {} to \"{}\"", answers.name, recipe.name());
    let recipe = recipe.add_ingredient(answers.name, answers.amount, answers.unit);
    store.replace(recipe)?;
    info!(id, "Added ingredient");

    display::success(&message);
    Ok(())
}
