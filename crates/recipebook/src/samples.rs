//! Example recipes used to seed or reset a collection.

use crate::recipe::{Ingredient, Recipe};

const SAMPLE_DATE: &str = "3/16/2023";

/// The fixed starter collection: Spaghetti Bolognese, Caesar Salad, Pancakes.
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::from_parts(
            1678972583949,
            "Spaghetti Bolognese",
            45.0,
            4,
            vec![
                Ingredient::new("Ground Beef", 1.0, "lb"),
                Ingredient::new("Onion", 1.0, "medium"),
                Ingredient::new("Garlic", 2.0, "cloves"),
                Ingredient::new("Tomato Sauce", 2.0, "cups"),
                Ingredient::new("Spaghetti", 1.0, "lb"),
            ],
            steps(&[
                "Chop the onion and garlic finely",
                "Brown the ground beef in a large pan",
                "Add the onion and garlic, cook until softened",
                "Pour in the tomato sauce and simmer for 30 minutes",
                "Meanwhile, cook the spaghetti according to package instructions",
                "Serve the sauce over the spaghetti",
            ]),
            SAMPLE_DATE,
        ),
        Recipe::from_parts(
            1678972583950,
            "Caesar Salad",
            15.0,
            2,
            vec![
                Ingredient::new("Romaine Lettuce", 1.0, "head"),
                Ingredient::new("Croutons", 1.0, "cup"),
                Ingredient::new("Parmesan Cheese", 1.75, "oz"),
                Ingredient::new("Caesar Dressing", 3.0, "tbsp"),
            ],
            steps(&[
                "Wash and chop the lettuce",
                "Toss with dressing",
                "Add croutons and grated parmesan",
                "Serve immediately",
            ]),
            SAMPLE_DATE,
        ),
        Recipe::from_parts(
            1678972583951,
            "Pancakes",
            20.0,
            6,
            vec![
                Ingredient::new("Flour", 2.0, "cups"),
                Ingredient::new("Milk", 1.5, "cups"),
                Ingredient::new("Eggs", 2.0, "large"),
                Ingredient::new("Baking Powder", 1.0, "tbsp"),
                Ingredient::new("Sugar", 2.0, "tbsp"),
                Ingredient::new("Salt", 0.5, "tsp"),
            ],
            steps(&[
                "Mix dry ingredients in a bowl",
                "Add wet ingredients and stir until smooth",
                "Heat griddle and pour batter to form pancakes",
                "Flip when bubbles form on surface",
                "Cook until golden brown",
                "Serve with maple syrup",
            ]),
            SAMPLE_DATE,
        ),
    ]
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::quick_recipes;

    #[test]
    fn test_default_recipes() {
        let recipes = default_recipes();
        let names: Vec<&str> = recipes.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["Spaghetti Bolognese", "Caesar Salad", "Pancakes"]
        );
        assert!(recipes.iter().all(|r| !r.steps().is_empty()));
        assert!(recipes.iter().all(|r| r.date_created() == SAMPLE_DATE));
    }

    #[test]
    fn test_default_recipes_quick_subset() {
        let recipes = default_recipes();
        let quick: Vec<u64> = quick_recipes(&recipes, 30.0)
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(quick, vec![1678972583950, 1678972583951]);
    }
}
