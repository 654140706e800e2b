//! Persistence for the recipe collection.
//!
//! The whole collection is the unit of storage: every change loads the full
//! list, edits it in memory and writes the full list back. There is no
//! locking, so two writers running at once can lose each other's updates.
//!
//! # Usage
//!
//! ```no_run
//! use recipebook::{JsonFileStore, Recipe, RecipeStore};
//!
//! let store = JsonFileStore::new("data/recipes.json");
//!
//! let recipe = Recipe::new("Pancakes", 20.0, Some(6))?;
//! let id = recipe.id();
//! store.insert(recipe)?;
//!
//! let recipe = store.find_by_id(id)?.add_step("Flip when bubbles form");
//! store.replace(recipe)?;
//! # Ok::<(), recipebook::RecipeError>(())
//! ```

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use tracing::debug;

use crate::collection::{self, position_of};
use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

/// Load and save the full recipe collection.
///
/// Implementors only provide [`load`](RecipeStore::load) and
/// [`save_all`](RecipeStore::save_all); the record-level helpers are built on
/// top of them.
pub trait RecipeStore {
    /// Load every stored recipe. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Replace the stored collection with `recipes`.
    fn save_all(&self, recipes: &[Recipe]) -> Result<()>;

    /// Fetch one recipe by id.
    fn find_by_id(&self, id: u64) -> Result<Recipe> {
        let recipes = self.load()?;
        collection::find_by_id(&recipes, id)
            .cloned()
            .ok_or(RecipeError::NotFound { id })
    }

    /// Append a recipe to the collection.
    fn insert(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.load()?;
        debug!(id = recipe.id(), name = recipe.name(), "Adding recipe");
        recipes.push(recipe);
        self.save_all(&recipes)
    }

    /// Overwrite the stored recipe that has the same id as `recipe`.
    ///
    /// Nothing is written when the id is unknown.
    fn replace(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.load()?;
        let index = position_of(&recipes, recipe.id())
            .ok_or(RecipeError::NotFound { id: recipe.id() })?;

        debug!(id = recipe.id(), name = recipe.name(), "Updating recipe");
        recipes[index] = recipe;
        self.save_all(&recipes)
    }

    /// Remove a recipe and return it.
    ///
    /// Nothing is written when the id is unknown.
    fn delete_by_id(&self, id: u64) -> Result<Recipe> {
        let mut recipes = self.load()?;
        let index = position_of(&recipes, id).ok_or(RecipeError::NotFound { id })?;

        let removed = recipes.remove(index);
        debug!(id, name = removed.name(), "Deleting recipe");
        self.save_all(&recipes)?;
        Ok(removed)
    }
}
