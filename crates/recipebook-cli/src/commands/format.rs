//! Format command - print the human-readable recipe block.

use recipebook::RecipeStore;

use crate::display;

pub fn run(store: &impl RecipeStore, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store.find_by_id(id)?;
    display::formatted_recipe(&recipe);
    Ok(())
}
