//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Recipebook: manage your recipes from the command line
#[derive(Parser)]
#[command(name = "recipebook")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(
    after_help = "Recipes are stored as JSON; pick the file with --data-file or RECIPEBOOK_DATA."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the recipe data file
    #[arg(long, global = true, env = crate::config::DATA_FILE_ENV, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes
    List,

    /// View recipe details
    View {
        /// Recipe ID
        id: u64,
    },

    /// View formatted recipe
    Format {
        /// Recipe ID
        id: u64,
    },

    /// Create a new recipe
    Create,

    /// Add an ingredient to a recipe
    AddIngredient {
        /// Recipe ID
        id: u64,
    },

    /// Add a step to a recipe
    AddStep {
        /// Recipe ID
        id: u64,
    },

    /// Remove a step from a recipe
    RemoveStep {
        /// Recipe ID
        id: u64,

        /// Step number to remove (1-based); prompts when omitted
        #[arg(allow_negative_numbers = true)]
        step: Option<i64>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: u64,
    },

    /// Find recipes that can be made quickly
    Quick {
        /// Maximum cooking time in minutes
        #[arg(default_value_t = recipebook::DEFAULT_QUICK_TIME)]
        time: f64,
    },

    /// Reset recipe data to the example recipes
    ResetData,
}
