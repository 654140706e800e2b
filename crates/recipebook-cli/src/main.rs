//! Recipebook CLI - manage recipes stored in a JSON file.

mod cli;
mod commands;
mod config;
mod display;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};
use recipebook::JsonFileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use prompt::Prompt;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_file = config::resolve_data_file(cli.data_file.as_deref());
    debug!(path = %data_file.display(), "Using recipe data file");

    let store = JsonFileStore::new(data_file);
    let mut prompt = Prompt::stdio();

    let result = match cli.command {
        Commands::List => commands::list::run(&store),

        Commands::View { id } => commands::view::run(&store, id),

        Commands::Format { id } => commands::format::run(&store, id),

        Commands::Create => commands::create::run(&store, &mut prompt),

        Commands::AddIngredient { id } => commands::add_ingredient::run(&store, &mut prompt, id),

        Commands::AddStep { id } => commands::add_step::run(&store, &mut prompt, id),

        Commands::RemoveStep { id, step } => {
            commands::remove_step::run(&store, &mut prompt, id, step)
        }

        Commands::Delete { id } => commands::delete::run(&store, &mut prompt, id, cli.yes),

        Commands::Quick { time } => commands::quick::run(&store, time),

        Commands::ResetData => commands::reset::run(&store, &mut prompt, cli.yes),
    };

    if let Err(e) = result {
        eprintln!("{}", display::report(e.as_ref()));
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
