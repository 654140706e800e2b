//! Interactive prompts for recipe fields.
//!
//! Answers are read line by line; invalid answers print a hint and ask again,
//! so values handed to the library are already non-blank and positive.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;
use recipebook::{DEFAULT_SERVINGS, RecipeError, Result};

/// Answers for a new recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeInfo {
    pub name: String,
    pub cooking_time: f64,
    pub servings: u32,
}

/// Answers for a new ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientInfo {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask once and return the trimmed answer.
    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{} {} ", "?".green().bold(), message.bold())
            .and_then(|_| self.output.flush())
            .map_err(|e| RecipeError::InvalidInput(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| RecipeError::InvalidInput(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(RecipeError::InvalidInput(
                "Input ended before an answer was given".into(),
            ));
        }

        Ok(line.trim().to_string())
    }

    fn hint(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", ">>".red(), message)
            .map_err(|e| RecipeError::InvalidInput(format!("Failed to write prompt: {}", e)))
    }

    /// Ask until a non-blank answer is given.
    pub fn text(&mut self, message: &str, required: &str) -> Result<String> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.hint(required)?;
        }
    }

    /// Ask until a positive, finite number is given.
    pub fn positive_number(&mut self, message: &str, required: &str) -> Result<f64> {
        loop {
            let answer = self.ask(message)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => return Ok(value),
                _ => self.hint(required)?,
            }
        }
    }

    /// Ask until a positive whole number is given; a blank answer takes `default`.
    ///
    /// Whole numbers written with a fraction, like `4.0`, are accepted.
    pub fn positive_integer(
        &mut self,
        message: &str,
        default: Option<u32>,
        required: &str,
    ) -> Result<u32> {
        let message = match default {
            Some(d) => format!("{} ({})", message, d),
            None => message.to_string(),
        };

        loop {
            let answer = self.ask(&message)?;
            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match whole_number(&answer) {
                Some(value) if value > 0 => return Ok(value),
                _ => self.hint(required)?,
            }
        }
    }

    /// Ask for a 1-based step number in `1..=count`; returns the zero-based index.
    pub fn step_number(&mut self, count: usize) -> Result<usize> {
        let message = format!("Enter step number to remove (1-{}):", count);
        loop {
            let answer = self.ask(&message)?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
                _ => self.hint(&format!("Please enter a number between 1 and {}", count))?,
            }
        }
    }

    /// Yes/no question; a blank answer means no.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        let message = format!("{} (y/N)", message);
        loop {
            let answer = self.ask(&message)?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.hint("Please answer y or n")?,
            }
        }
    }

    pub fn recipe_info(&mut self) -> Result<RecipeInfo> {
        let name = self.text("Enter recipe name:", "Recipe name is required")?;
        let cooking_time = self.positive_number(
            "Enter cooking time (minutes):",
            "Cooking time must be a positive number",
        )?;
        let servings = self.positive_integer(
            "Enter number of servings:",
            Some(DEFAULT_SERVINGS),
            "Number of servings must be a positive whole number",
        )?;

        Ok(RecipeInfo {
            name,
            cooking_time,
            servings,
        })
    }

    pub fn ingredient(&mut self) -> Result<IngredientInfo> {
        let name = self.text("Enter ingredient name:", "Ingredient name is required")?;
        let amount = self.positive_number("Enter amount:", "Amount must be a positive number")?;
        let unit = self.text("Enter unit:", "Unit is required")?;

        Ok(IngredientInfo { name, amount, unit })
    }

    pub fn step(&mut self) -> Result<String> {
        self.text("Next step instructions:", "Instructions are required")
    }
}

fn whole_number(answer: &str) -> Option<u32> {
    let value = answer.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) fn scripted(answers: &str) -> Prompt<io::Cursor<Vec<u8>>, io::Sink> {
    Prompt::new(io::Cursor::new(answers.as_bytes().to_vec()), io::sink())
}
