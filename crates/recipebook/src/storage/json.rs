//! JSON file storage - one pretty-printed array of recipes.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

use super::RecipeStore;

/// Stores the collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> RecipeError {
        RecipeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write_file(&self, path: &Path, recipes: &[Recipe]) -> Result<()> {
        let file = File::create(path).map_err(|e| self.io_error(path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, recipes).map_err(|e| {
            RecipeError::Persistence(format!(
                "Failed to serialize recipes for '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        writer.flush().map_err(|e| self.io_error(path, e))
    }
}

impl RecipeStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No recipe data file found, starting empty");
            return Ok(Vec::new());
        }

        debug!(path = %self.path.display(), "Loading recipes");
        let file = File::open(&self.path).map_err(|e| self.io_error(&self.path, e))?;
        let reader = BufReader::new(file);

        let recipes: Vec<Recipe> =
            serde_json::from_reader(reader).map_err(|e| RecipeError::Json {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(count = recipes.len(), "Loaded recipes");
        Ok(recipes)
    }

    fn save_all(&self, recipes: &[Recipe]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "Creating data directory");
                fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
            }
        }

        debug!(count = recipes.len(), path = %self.path.display(), "Saving recipes");

        // Write beside the target and rename, so a failed save leaves the old file intact.
        let tmp_path = temp_path(&self.path);
        if let Err(e) = self.write_file(&tmp_path, recipes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(&self.path, e));
        }
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("data/recipes.json")),
            PathBuf::from("data/recipes.json.tmp")
        );
        assert_eq!(
            temp_path(Path::new("recipes.json")),
            PathBuf::from("recipes.json.tmp")
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = JsonFileStore::new("definitely/not/here/recipes.json");
        assert!(store.load().unwrap().is_empty());
    }
}
