//! The recipe record type.

use serde::{Deserialize, Serialize};

/// A single catalogued example: metadata paired with a literal code payload.
///
/// `category` and `tags` are free-form labels; new categories may appear
/// without any code change. A recipe whose `code` is empty is a placeholder
/// for a category that has no example yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque identifier, unique within a registry
    pub id: String,

    /// Short human-readable label
    pub title: String,

    /// Explanatory text; rendered as markdown in HTML views
    #[serde(default)]
    pub description: String,

    /// Free-form grouping label
    pub category: String,

    /// Literal example source text
    #[serde(default)]
    pub code: String,

    /// Free-form descriptive labels; order and duplicates are not meaningful
    #[serde(default)]
    pub tags: Vec<String>,

    /// Attribution
    #[serde(default)]
    pub author: String,

    /// Date-only creation stamp, `YYYY-MM-DD`
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

impl Recipe {
    /// Create a recipe with the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            code: String::new(),
            tags: Vec::new(),
            author: String::new(),
            created_at: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the code payload.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the creation date.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Whether this recipe is a placeholder awaiting a real example.
    pub fn is_placeholder(&self) -> bool {
        self.code.trim().is_empty()
    }

    /// Whether this recipe carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_recipe_with_metadata() {
        let recipe = Recipe::new("1", "Class composition", "styling")
            .with_description("Combine Tailwind classes safely.")
            .with_code("export function cn() {}")
            .with_tags(["tailwind", "utils"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15");

        assert_eq!(recipe.id, "1");
        assert_eq!(recipe.category, "styling");
        assert_eq!(recipe.tags, vec!["tailwind", "utils"]);
        assert!(!recipe.is_placeholder());
    }

    #[test]
    fn empty_code_is_placeholder() {
        let recipe = Recipe::new("6", "Coming soon", "icons");
        assert!(recipe.is_placeholder());

        let whitespace = Recipe::new("7", "Coming soon", "icons").with_code("  \n");
        assert!(whitespace.is_placeholder());
    }

    #[test]
    fn has_tag_matches_exactly() {
        let recipe = Recipe::new("1", "Dates", "dates").with_tags(["dates", "formatting"]);

        assert!(recipe.has_tag("dates"));
        assert!(!recipe.has_tag("date"));
        assert!(!recipe.has_tag("DATES"));
    }

    #[test]
    fn deserializes_camel_case_created_at() {
        let recipe: Recipe = toml::from_str(
            r#"
id = "1"
title = "Class composition"
category = "styling"
createdAt = "2024-03-15"
"#,
        )
        .unwrap();

        assert_eq!(recipe.created_at, "2024-03-15");
        assert_eq!(recipe.description, "");
        assert!(recipe.tags.is_empty());
    }
}
