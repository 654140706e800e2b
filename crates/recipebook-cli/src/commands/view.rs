//! View command - show every field of one recipe.

use recipebook::RecipeStore;

use crate::display;

pub fn run(store: &impl RecipeStore, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store.find_by_id(id)?;
    display::recipe_details(&recipe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook::RecipeError;

    #[test]
    fn test_view_existing() {
        let store = crate::commands::sample_store();
        assert!(run(&store, 1678972583951).is_ok());
    }

    #[test]
    fn test_view_missing_is_not_found() {
        let store = crate::commands::sample_store();
        let err = run(&store, 5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecipeError>(),
            Some(RecipeError::NotFound { id: 5 })
        ));
    }
}
