//! Terminal output: recipe tables, detail views and status lines.

use std::error::Error;

use colored::{ColoredString, Colorize};
use recipebook::{Recipe, RecipeError, format_recipe};

/// Column widths for the recipe table, padding included.
const COLUMN_WIDTHS: [usize; 4] = [15, 25, 15, 12];

type Paint = fn(&str) -> ColoredString;

/// Print recipes as a table of ID, name, cooking time and servings.
pub fn recipe_table(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("{}", "No recipes found".yellow());
        return;
    }

    for line in table_lines(recipes) {
        println!("{}", line);
    }
}

fn table_lines(recipes: &[&Recipe]) -> Vec<String> {
    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "─".repeat(*w)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let header: [Paint; 4] = [|s| s.cyan(), |s| s.red(), |s| s.green(), |s| s.yellow()];
    let titles = ["ID", "Name", "Cooking Time", "Servings"];
    let header_cells: Vec<String> = titles
        .iter()
        .zip(COLUMN_WIDTHS)
        .zip(header)
        .map(|((title, width), paint)| format!(" {} ", paint(&fit(title, width - 2))))
        .collect();

    let mut lines = vec![
        rule("┌", "┬", "┐"),
        format!("│{}│", header_cells.join("│")),
        rule("├", "┼", "┤"),
    ];

    for recipe in recipes {
        let values = [
            recipe.id().to_string(),
            recipe.name().to_string(),
            recipe.cooking_time().to_string(),
            recipe.servings().to_string(),
        ];
        let cells: Vec<String> = values
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(value, width)| format!(" {} ", fit(value, width - 2)))
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }

    lines.push(rule("└", "┴", "┘"));
    lines
}

/// Pad or truncate `value` to exactly `width` characters.
fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        format!("{:<width$}", value, width = width)
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Print every field of a recipe, with numbered steps.
pub fn recipe_details(recipe: &Recipe) {
    println!();
    println!("{}", format!("Recipe: {}", recipe.name()).cyan().bold());
    println!("{} {}", "ID:".green().bold(), recipe.id());
    println!(
        "{} {} minutes",
        "Cooking Time:".blue().bold(),
        recipe.cooking_time()
    );
    println!("{} {}", "Servings:".yellow().bold(), recipe.servings());
    println!("{} {}", "Date Created:".cyan().bold(), recipe.date_created());

    println!();
    println!("{}", "Ingredients:".cyan().bold());
    if recipe.ingredients().is_empty() {
        println!("{}", "No ingredients added yet".yellow());
    } else {
        for ing in recipe.ingredients() {
            println!(
                "  - {} {} of {}",
                ing.amount,
                ing.unit,
                ing.name.white().bold()
            );
        }
    }

    println!();
    println!("{}", "Steps:".cyan().bold());
    step_lines(recipe);
    println!();
}

/// Print the numbered steps of a recipe.
pub fn step_lines(recipe: &Recipe) {
    if recipe.steps().is_empty() {
        println!("{}", "No steps added yet".yellow());
        return;
    }
    for (i, step) in recipe.steps().iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().cyan(), step);
    }
}

/// Print the formatted recipe block.
pub fn formatted_recipe(recipe: &Recipe) {
    println!();
    println!("{}", format_recipe(recipe));
    println!();
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {}", message).green());
}

pub fn warning(message: &str) {
    eprintln!("{}", warning_line(message));
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ {}", message).blue());
}

/// Status line for a failed command. A missing recipe is a warning; anything
/// else is reported as an error.
pub fn report(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<RecipeError>() {
        Some(RecipeError::NotFound { .. }) => warning_line(&err.to_string()),
        _ => error_line(&format!("Error: {}", err)),
    }
}

fn error_line(message: &str) -> String {
    format!("✗ {}", message).red().to_string()
}

fn warning_line(message: &str) -> String {
    format!("⚠ {}", message).yellow().to_string()
}
