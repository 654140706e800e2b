//! Quick command - list recipes that fit in a time budget.

use colored::Colorize;
use recipebook::{RecipeStore, quick_recipes};
use tracing::debug;

use crate::display;

pub fn run(store: &impl RecipeStore, max_time: f64) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = store.load()?;
    let quick = quick_recipes(&recipes, max_time);
    debug!(max_time, matched = quick.len(), "Filtered quick recipes");

    println!(
        "{} {} minutes or less",
        "Recipes ready in".cyan().bold(),
        max_time.to_string().white().bold()
    );
    display::recipe_table(&quick);

    Ok(())
}
