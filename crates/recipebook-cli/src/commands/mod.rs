//! CLI command implementations.
//!
//! Each command loads the collection through a [`recipebook::RecipeStore`],
//! gathers input through a [`crate::prompt::Prompt`] where needed, and writes
//! the whole collection back before reporting the result.

pub mod add_ingredient;
pub mod add_step;
pub mod create;
pub mod delete;
pub mod format;
pub mod list;
pub mod quick;
pub mod remove_step;
pub mod reset;
pub mod view;

#[cfg(test)]
pub(crate) fn sample_store() -> recipebook::MemoryStore {
    recipebook::MemoryStore::with_recipes(recipebook::samples::default_recipes())
}
