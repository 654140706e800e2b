//! Recipebook: recipe records, formatting and JSON storage.
//!
//! The library holds everything the `recipebook` CLI needs apart from the
//! terminal itself: the [`Recipe`] record and its mutators, the text
//! formatter, collection filters, and the [`RecipeStore`] persistence seam.
//!
//! # Example
//!
//! ```no_run
//! use recipebook::{format_recipe, JsonFileStore, Recipe, RecipeStore};
//!
//! let store = JsonFileStore::new("data/recipes.json");
//!
//! let recipe = Recipe::new("Simple Omelet", 10.0, Some(1))?
//!     .add_ingredient("Eggs", 2.0, "large")
//!     .add_step("Beat eggs, milk, and salt together");
//! store.insert(recipe.clone())?;
//!
//! println!("{}", format_recipe(&recipe));
//! # Ok::<(), recipebook::RecipeError>(())
//! ```

pub mod collection;
pub mod error;
pub mod format;
pub mod recipe;
pub mod samples;
pub mod storage;

pub use collection::{DEFAULT_QUICK_TIME, find_by_name, quick_recipes};
pub use error::{RecipeError, Result};
pub use format::{format_recipe, ingredients_list, steps_list, time_per_serving};
pub use recipe::{DEFAULT_SERVINGS, Ingredient, Recipe};
pub use storage::{JsonFileStore, MemoryStore, RecipeStore};
