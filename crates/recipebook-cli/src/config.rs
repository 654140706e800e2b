//! Data file resolution.
//!
//! Priority order:
//! 1. `--data-file` argument, or the `RECIPEBOOK_DATA` environment variable
//!    (clap merges both into one value)
//! 2. `<platform data dir>/recipebook/recipes.json`
//! 3. `./data/recipes.json`

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data file location.
pub const DATA_FILE_ENV: &str = "RECIPEBOOK_DATA";

const APP_DIR: &str = "recipebook";
const DATA_FILE_NAME: &str = "recipes.json";

/// Pick the recipe data file for this run.
pub fn resolve_data_file(cli_arg: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    default_data_file(dirs::data_dir())
}

fn default_data_file(data_dir: Option<PathBuf>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.join(APP_DIR).join(DATA_FILE_NAME),
        None => PathBuf::from("data").join(DATA_FILE_NAME),
    }
}
