//! Integration tests for JSON file storage.

use std::fs;

use tempfile::TempDir;

use recipebook::samples::default_recipes;
use recipebook::{Ingredient, JsonFileStore, Recipe, RecipeError, RecipeStore};

/// Helper to create a store inside a fresh temporary directory.
fn temp_store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("data").join("recipes.json"));
    (dir, store)
}

fn omelet() -> Recipe {
    Recipe::new("Simple Omelet", 10.0, Some(1))
        .unwrap()
        .add_ingredient("Eggs", 2.0, "large")
        .add_ingredient("Milk", 2.0, "tbsp")
        .add_step("Beat eggs, milk, and salt together")
        .add_step("Pour egg mixture into pan")
}

// =============================================================================
// Load / Save
// =============================================================================

#[test]
fn test_load_without_file_is_empty() {
    let (_dir, store) = temp_store();

    assert!(store.load().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, store) = temp_store();
    let mut recipes = default_recipes();
    recipes.push(omelet());

    store.save_all(&recipes).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, recipes);
}

#[test]
fn test_save_creates_parent_directory() {
    let (_dir, store) = temp_store();
    store.save_all(&[omelet()]).unwrap();

    assert!(store.path().exists());
    assert!(!store.path().with_file_name("recipes.json.tmp").exists());
}

#[test]
fn test_saved_file_is_pretty_with_stable_key_order() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()[..1]).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(
        text.starts_with("[\n  {\n    \"id\": 1678972583949,"),
        "{}",
        text
    );

    let keys = [
        "\"id\"",
        "\"name\"",
        "\"cookingTime\"",
        "\"servings\"",
        "\"ingredients\"",
        "\"steps\"",
        "\"dateCreated\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_saved_whole_numbers_have_no_fraction() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()[1..2]).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\"cookingTime\": 15,"), "{}", text);
    assert!(text.contains("\"amount\": 1,"), "{}", text);
    assert!(text.contains("\"amount\": 1.75,"), "{}", text);
}

#[test]
fn test_failed_save_removes_temp_file() {
    let (_dir, store) = temp_store();
    // A non-empty directory at the data path makes the final rename fail.
    fs::create_dir_all(store.path().join("occupied")).unwrap();

    let err = store.save_all(&default_recipes()).unwrap_err();
    assert!(matches!(err, RecipeError::Io { .. }));
    assert!(err.is_storage_failure());
    assert!(!store.path().with_file_name("recipes.json.tmp").exists());
    assert!(store.path().is_dir());
}

#[test]
fn test_load_data_written_by_hand() {
    let (_dir, store) = temp_store();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"[
  {
    "id": 1678972583951,
    "name": "Pancakes",
    "cookingTime": 20,
    "servings": 6,
    "ingredients": [
      { "name": "Flour", "amount": 2, "unit": "cups" }
    ],
    "steps": ["Mix dry ingredients in a bowl"],
    "dateCreated": "3/16/2023"
  }
]"#,
    )
    .unwrap();

    let recipes = store.load().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].cooking_time(), 20.0);
    assert_eq!(
        recipes[0].ingredients(),
        [Ingredient::new("Flour", 2.0, "cups")]
    );
}

#[test]
fn test_corrupt_file_is_storage_failure() {
    let (_dir, store) = temp_store();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, RecipeError::Json { .. }));
    assert!(err.is_storage_failure());
}

// =============================================================================
// Record helpers
// =============================================================================

#[test]
fn test_insert_appends() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()).unwrap();

    let recipe = omelet();
    let id = recipe.id();
    store.insert(recipe).unwrap();

    let recipes = store.load().unwrap();
    assert_eq!(recipes.len(), 4);
    assert_eq!(recipes[3].id(), id);
}

#[test]
fn test_find_modify_replace() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()).unwrap();

    let recipe = store
        .find_by_id(1678972583950)
        .unwrap()
        .add_ingredient("Anchovies", 2.0, "fillets")
        .remove_step(3);
    store.replace(recipe).unwrap();

    let reloaded = store.find_by_id(1678972583950).unwrap();
    assert_eq!(reloaded.ingredients().len(), 5);
    assert_eq!(reloaded.steps().len(), 3);

    let ids: Vec<u64> = store.load().unwrap().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![1678972583949, 1678972583950, 1678972583951]);
}

#[test]
fn test_delete_by_id() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()).unwrap();

    let removed = store.delete_by_id(1678972583949).unwrap();
    assert_eq!(removed.name(), "Spaghetti Bolognese");
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn test_missing_id_leaves_file_untouched() {
    let (_dir, store) = temp_store();
    store.save_all(&default_recipes()).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();
    let ghost = Recipe::from_parts(1, "Ghost", 5.0, 1, vec![], vec![], "1/1/2024");

    assert!(matches!(
        store.find_by_id(1),
        Err(RecipeError::NotFound { id: 1 })
    ));
    assert!(matches!(
        store.replace(ghost),
        Err(RecipeError::NotFound { id: 1 })
    ));
    assert!(matches!(
        store.delete_by_id(1),
        Err(RecipeError::NotFound { id: 1 })
    ));

    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}
