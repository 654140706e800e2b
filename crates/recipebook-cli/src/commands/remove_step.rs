//! Remove-step command - drop one numbered step from a recipe.
//!
//! Unlike [`recipebook::Recipe::remove_step`], which ignores indices past the
//! end, this command rejects a step number outside `1..=steps` with a warning
//! and leaves the stored recipe untouched.

use std::io::{BufRead, Write};

use colored::Colorize;
use recipebook::RecipeStore;
use tracing::info;

use crate::display;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    store: &impl RecipeStore,
    prompt: &mut Prompt<R, W>,
    id: u64,
    step: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store.find_by_id(id)?;
    let count = recipe.steps().len();

    if count == 0 {
        display::warning("This recipe has no steps to remove");
        return Ok(());
    }

    let index = match step {
        Some(number) => match checked_index(number, count) {
            Some(index) => index,
            None => {
                display::warning(&format!(
                    "Invalid step index. Please use a number between 1 and {}",
                    count
                ));
                return Ok(());
            }
        },
        None => {
            println!("{}", "Current steps:".cyan());
            display::step_lines(&recipe);
            prompt.step_number(count)?
        }
    };

    let message = format!("Removed step {} from \"{}\"", index + 1, recipe.name());
    let recipe = recipe.remove_step(index);
    store.replace(recipe)?;
    info!(id, step = index + 1, "Removed step");

    display::success(&message);
    Ok(())
}

/// Zero-based index for a 1-based step number, if it names an existing step.
fn checked_index(number: i64, count: usize) -> Option<usize> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted;
    use recipebook::{MemoryStore, Recipe};

    const SALAD: u64 = 1678972583950;

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(1, 3), Some(0));
        assert_eq!(checked_index(3, 3), Some(2));
        assert_eq!(checked_index(0, 3), None);
        assert_eq!(checked_index(4, 3), None);
        assert_eq!(checked_index(-1, 3), None);
    }

    #[test]
    fn test_remove_given_step() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("");

        run(&store, &mut prompt, SALAD, Some(2)).unwrap();

        let recipe = store.find_by_id(SALAD).unwrap();
        assert_eq!(
            recipe.steps(),
            [
                "Wash and chop the lettuce",
                "Add croutons and grated parmesan",
                "Serve immediately",
            ]
        );
    }

    #[test]
    fn test_out_of_range_step_is_not_saved() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("");

        run(&store, &mut prompt, SALAD, Some(5)).unwrap();
        run(&store, &mut prompt, SALAD, Some(0)).unwrap();
        run(&store, &mut prompt, SALAD, Some(-2)).unwrap();

        assert_eq!(store.save_count(), 0);
        assert_eq!(store.find_by_id(SALAD).unwrap().steps().len(), 4);
    }

    #[test]
    fn test_prompts_when_step_omitted() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("9\n4\n");

        run(&store, &mut prompt, SALAD, None).unwrap();

        let recipe = store.find_by_id(SALAD).unwrap();
        assert_eq!(recipe.steps().len(), 3);
        assert_eq!(
            recipe.steps().last().map(String::as_str),
            Some("Add croutons and grated parmesan")
        );
    }

    #[test]
    fn test_no_steps_warns_without_saving() {
        let recipe = Recipe::new("Water", 1.0, Some(1)).unwrap();
        let id = recipe.id();
        let store = MemoryStore::with_recipes(vec![recipe]);
        let mut prompt = scripted("");

        run(&store, &mut prompt, id, None).unwrap();
        assert_eq!(store.save_count(), 0);
    }
}
