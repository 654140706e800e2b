//! Delete command - remove a recipe after confirmation.

use std::io::{BufRead, Write};

use recipebook::RecipeStore;
use tracing::info;

use crate::display;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    store: &impl RecipeStore,
    prompt: &mut Prompt<R, W>,
    id: u64,
    assume_yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store.find_by_id(id)?;

    let question = format!("Are you sure you want to delete \"{}\"?", recipe.name());
    if !assume_yes && !prompt.confirm(&question)? {
        display::info("Delete cancelled");
        return Ok(());
    }

    let removed = store.delete_by_id(id)?;
    info!(id, "Deleted recipe");

    display::success(&format!("Deleted recipe \"{}\"", removed.name()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted;

    const PANCAKES: u64 = 1678972583951;

    #[test]
    fn test_delete_confirmed() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("y\n");

        run(&store, &mut prompt, PANCAKES, false).unwrap();

        assert!(store.find_by_id(PANCAKES).is_err());
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_cancelled() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("n\n");

        run(&store, &mut prompt, PANCAKES, false).unwrap();

        assert!(store.find_by_id(PANCAKES).is_ok());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_delete_assume_yes_skips_prompt() {
        let store = crate::commands::sample_store();
        let mut prompt = scripted("");

        run(&store, &mut prompt, PANCAKES, true).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
