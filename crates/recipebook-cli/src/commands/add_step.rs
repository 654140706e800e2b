//! Add-step command - prompt for an instruction and append it.

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
    let instruction = prompt.step()?;

    let recipe = recipe.add_step(instruction);
    let message = format!(
        "Added step {} to \"{}\"",
        recipe.steps().len(),
        recipe.name()
    );
    store.replace(recipe)?;
    info!(id, "Added step");

    display::success(&message);
    Ok(())
}
