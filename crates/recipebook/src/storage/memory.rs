//! In-memory recipe storage for tests and embedding.

use std::cell::{Cell, RefCell};

use crate::error::Result;
use crate::recipe::Recipe;

use super::RecipeStore;

/// Keeps the collection in memory; nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recipes: RefCell<Vec<Recipe>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `recipes`.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RefCell::new(recipes),
            saves: Cell::new(0),
        }
    }

    /// Number of times [`RecipeStore::save_all`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl RecipeStore for MemoryStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.borrow().clone())
    }

    fn save_all(&self, recipes: &[Recipe]) -> Result<()> {
        *self.recipes.borrow_mut() = recipes.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
