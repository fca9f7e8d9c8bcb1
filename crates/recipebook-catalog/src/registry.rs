//! Read-only recipe registry with id, category, and tag lookups.

use std::collections::HashMap;

use crate::recipe::Recipe;

/// An immutable collection of recipes with deterministic query operations.
///
/// Construction validates the candidate set; after that the registry never
/// changes, so any number of concurrent readers may query it without
/// coordination. Queries preserve the original insertion order. Lookup by id
/// goes through a precomputed index; category and tag filters are linear
/// scans, which is fine at catalog scale.
#[derive(Debug, Default)]
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl RecipeRegistry {
    /// Build a registry from a candidate set of recipes.
    ///
    /// Rejects duplicate ids and recipes missing a required field, since
    /// either would silently break the uniqueness contract `get` relies on.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            let missing = if recipe.id.is_empty() {
                Some("id")
            } else if recipe.title.is_empty() {
                Some("title")
            } else if recipe.category.is_empty() {
                Some("category")
            } else {
                None
            };

            if let Some(field) = missing {
                return Err(RegistryError::MissingField { position, field });
            }

            if by_id.insert(recipe.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(recipe.id.clone()));
            }
        }

        Ok(Self { recipes, by_id })
    }

    /// Every recipe in original insertion order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate over all recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Look up a recipe by id. Absence is a normal outcome, not an error.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|&i| &self.recipes[i])
    }

    /// Whether a recipe with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All recipes whose category equals the argument, in original order.
    pub fn by_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// All recipes carrying the given tag, in original order.
    pub fn by_tag(&self, tag: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.has_tag(tag)).collect()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for recipe in &self.recipes {
            if !seen.contains(&recipe.category.as_str()) {
                seen.push(recipe.category.as_str());
            }
        }
        seen
    }

    /// Distinct tag labels in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for recipe in &self.recipes {
            for tag in &recipe.tags {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag.as_str());
                }
            }
        }
        seen
    }

    /// Number of recipes in the registry.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the registry holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Errors rejected at registry construction.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Recipe at position {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new("1", "Class composition", "styling")
                .with_code("export function cn() {}")
                .with_tags(["tailwind", "clsx", "styling"]),
            Recipe::new("2", "Fade animation", "animations")
                .with_code("export const FadeIn = () => null;")
                .with_tags(["animation", "transitions"]),
            Recipe::new("3", "Form validation", "forms")
                .with_code("const schema = z.object({});")
                .with_tags(["forms", "validation", "styling"]),
            Recipe::new("6", "Coming soon", "icons").with_tags(["icons"]),
        ]
    }

    #[test]
    fn gets_every_recipe_by_its_own_id() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        for recipe in registry.all() {
            assert_eq!(registry.get(&recipe.id), Some(recipe));
        }
    }

    #[test]
    fn unknown_id_is_absent_not_a_panic() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        assert_eq!(registry.get("99"), None);
        assert!(!registry.contains("99"));
    }

    #[test]
    fn category_filter_is_sound_and_complete() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        let styling = registry.by_category("styling");
        assert_eq!(styling.len(), 1);
        assert_eq!(styling[0].id, "1");

        for recipe in &styling {
            assert_eq!(recipe.category, "styling");
        }

        // Every styling recipe appears exactly once
        let expected: Vec<&Recipe> = registry
            .all()
            .iter()
            .filter(|r| r.category == "styling")
            .collect();
        assert_eq!(styling, expected);
    }

    #[test]
    fn unknown_category_yields_empty_sequence() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        assert!(registry.by_category("cookies").is_empty());
    }

    #[test]
    fn tag_filter_preserves_original_relative_order() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        let styling = registry.by_tag("styling");
        let ids: Vec<&str> = styling.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        for recipe in &styling {
            assert!(recipe.has_tag("styling"));
        }

        assert!(registry.by_tag("nonexistent").is_empty());
    }

    #[test]
    fn all_returns_everything_in_insertion_order() {
        let recipes = sample();
        let count = recipes.len();
        let registry = RecipeRegistry::from_recipes(recipes).unwrap();

        assert_eq!(registry.len(), count);
        let ids: Vec<&str> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "6"]);
    }

    #[test]
    fn queries_are_deterministic() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        assert_eq!(registry.by_category("forms"), registry.by_category("forms"));
        assert_eq!(registry.by_tag("validation"), registry.by_tag("validation"));
        assert_eq!(registry.get("2"), registry.get("2"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let recipes = vec![
            Recipe::new("1", "First", "styling"),
            Recipe::new("1", "Second", "forms"),
        ];

        let err = RecipeRegistry::from_recipes(recipes).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let err = RecipeRegistry::from_recipes(vec![Recipe::new("", "Title", "styling")]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingField {
                position: 0,
                field: "id"
            }
        ));

        let err = RecipeRegistry::from_recipes(vec![Recipe::new("1", "", "styling")]).unwrap_err();
        assert!(matches!(err, RegistryError::MissingField { field: "title", .. }));

        let err = RecipeRegistry::from_recipes(vec![Recipe::new("1", "Title", "")]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingField {
                field: "category",
                ..
            }
        ));
    }

    #[test]
    fn distinct_labels_in_first_seen_order() {
        let registry = RecipeRegistry::from_recipes(sample()).unwrap();

        assert_eq!(
            registry.categories(),
            vec!["styling", "animations", "forms", "icons"]
        );
        assert_eq!(
            registry.tags(),
            vec![
                "tailwind",
                "clsx",
                "styling",
                "animation",
                "transitions",
                "forms",
                "validation",
                "icons"
            ]
        );
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = RecipeRegistry::from_recipes(Vec::new()).unwrap();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.get("1"), None);
    }
}
