//! List command - show every recipe in a table.

use recipebook::RecipeStore;
use tracing::debug;

use crate::display;

pub fn run(store: &impl RecipeStore) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = store.load()?;
    debug!(count = recipes.len(), "Listing recipes");

    let rows: Vec<_> = recipes.iter().collect();
    display::recipe_table(&rows);

    Ok(())
}
