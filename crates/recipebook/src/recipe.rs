//! Recipe and ingredient records and the operations that build them up.
//!
//! A [`Recipe`] is an owned value. Every mutator takes the recipe by value and
//! hands back the updated record, so callers always see exactly which value
//! they are holding:
//!
//! ```
//! use recipebook::Recipe;
//!
//! let recipe = Recipe::new("Pancakes", 20.0, Some(6))?
//!     .add_ingredient("Flour", 2.0, "cups")
//!     .add_step("Mix dry ingredients in a bowl")
//!     .add_step("Add wet ingredients and stir until smooth");
//!
//! assert_eq!(recipe.ingredients().len(), 1);
//! assert_eq!(recipe.steps().len(), 2);
//! # Ok::<(), recipebook::RecipeError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{RecipeError, Result};

/// Servings used when the caller does not give a count.
pub const DEFAULT_SERVINGS: u32 = 4;

/// A single line item of a recipe, e.g. "2 cups of Flour".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    /// Create a new ingredient.
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// One dish: its timings, ingredients and numbered steps.
///
/// Field order here is the key order of the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: u64,
    name: String,
    #[serde(serialize_with = "serialize_number")]
    cooking_time: f64,
    servings: u32,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    steps: Vec<String>,
    date_created: String,
}

impl Recipe {
    /// Create a new recipe with a fresh id, no ingredients and no steps.
    ///
    /// `servings` falls back to [`DEFAULT_SERVINGS`]. Returns
    /// [`RecipeError::InvalidInput`] for a blank name or a non-positive
    /// cooking time or servings count.
    pub fn new(name: impl Into<String>, cooking_time: f64, servings: Option<u32>) -> Result<Self> {
        let name = name.into();
        let servings = servings.unwrap_or(DEFAULT_SERVINGS);

        if name.trim().is_empty() {
            return Err(RecipeError::InvalidInput("Recipe name is required".into()));
        }
        if !cooking_time.is_finite() || cooking_time <= 0.0 {
            return Err(RecipeError::InvalidInput(format!(
                "Cooking time must be a positive number of minutes, got {}",
                cooking_time
            )));
        }
        if servings == 0 {
            return Err(RecipeError::InvalidInput(
                "Servings must be a positive number".into(),
            ));
        }

        Ok(Self {
            id: next_recipe_id(),
            name,
            cooking_time,
            servings,
            ingredients: Vec::new(),
            steps: Vec::new(),
            date_created: today(),
        })
    }

    /// Assemble a recipe from already-known parts, e.g. fixed sample data.
    ///
    /// No validation is performed.
    pub fn from_parts(
        id: u64,
        name: impl Into<String>,
        cooking_time: f64,
        servings: u32,
        ingredients: Vec<Ingredient>,
        steps: Vec<String>,
        date_created: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cooking_time,
            servings,
            ingredients,
            steps,
            date_created: date_created.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cooking time in minutes.
    pub fn cooking_time(&self) -> f64 {
        self.cooking_time
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Local date the recipe was created, as `M/D/YYYY`.
    pub fn date_created(&self) -> &str {
        &self.date_created
    }

    /// Append an ingredient. Duplicates are allowed.
    pub fn add_ingredient(
        mut self,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        self.ingredients.push(Ingredient::new(name, amount, unit));
        self
    }

    /// Append a step to the end of the instructions.
    pub fn add_step(mut self, instruction: impl Into<String>) -> Self {
        self.steps.push(instruction.into());
        self
    }

    /// Remove the step at zero-based `index`.
    ///
    /// An index past the end leaves the steps untouched; callers that want an
    /// error for that case must check the bounds themselves.
    pub fn remove_step(mut self, index: usize) -> Self {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
        self
    }
}

/// Millisecond timestamp id, bumped past the last issued id so that two
/// recipes created in the same millisecond still differ.
fn next_recipe_id() -> u64 {
    static LAST_ID: AtomicU64 = AtomicU64::new(0);

    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let next = now.max(last + 1);
        match LAST_ID.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

fn today() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}

/// Largest magnitude below which every whole `f64` is exactly an `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers without a fractional part (`45`, not `45.0`).
fn serialize_number<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
