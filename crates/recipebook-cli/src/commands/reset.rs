//! Reset-data command - overwrite the collection with the example recipes.

use std::io::{BufRead, Write};

use recipebook::RecipeStore;
use recipebook::samples::default_recipes;
use tracing::info;

use crate::display;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    store: &impl RecipeStore,
    prompt: &mut Prompt<R, W>,
    assume_yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let question =
        "Are you sure you want to reset all recipe data to defaults? This cannot be undone.";
    if !assume_yes && !prompt.confirm(question)? {
        display::info("Reset cancelled");
        return Ok(());
    }

    let recipes = default_recipes();
    store.save_all(&recipes)?;
    info!(count = recipes.len(), "Reset recipe data");

    display::success("Recipe data has been reset to defaults");
    display::info(&format!("Recipes added: {}", recipes.len()));
    Ok(())
}
