//! Loading user-provided recipe files.
//!
//! A recipe file is TOML containing one or more `[[recipe]]` tables, with
//! `code` typically held in a multi-line string:
//!
//! ```toml
//! [[recipe]]
//! id = "team-1"
//! title = "Debounced search input"
//! category = "forms"
//! tags = ["forms", "debounce"]
//! code = '''
//! export function useDebounce(value, delay) { /* ... */ }
//! '''
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::builtin::builtin_recipes;
use crate::recipe::Recipe;
use crate::registry::{RecipeRegistry, RegistryError};

/// On-disk recipe file shape.
#[derive(Debug, Deserialize)]
struct RecipeFile {
    #[serde(default)]
    recipe: Vec<Recipe>,
}

/// Errors from reading recipe files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Recipes directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
}

/// Errors from assembling a full catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Parse all recipes from a single TOML file.
pub fn load_file(path: &Path) -> Result<Vec<Recipe>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let file: RecipeFile = toml::from_str(&content).map_err(|e| LoadError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(file.recipe)
}

/// Load every `.toml` recipe file under a directory.
///
/// Files are visited in file-name order so the resulting recipe order is
/// deterministic across runs. Non-TOML files are ignored.
pub fn load_dir(dir: &Path) -> Result<Vec<Recipe>, LoadError> {
    if !dir.exists() {
        return Err(LoadError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut recipes = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "toml" {
            continue;
        }

        recipes.extend(load_file(path)?);
    }

    Ok(recipes)
}

/// Assemble the full catalog: built-in recipes plus an optional directory
/// of user recipes, validated as one registry.
///
/// Duplicate ids, including collisions between user files and the built-in
/// set, are rejected at construction.
pub fn load_catalog(recipes_dir: Option<&Path>) -> Result<RecipeRegistry, CatalogError> {
    let mut recipes = builtin_recipes();

    if let Some(dir) = recipes_dir {
        recipes.extend(load_dir(dir)?);
    }

    Ok(RecipeRegistry::from_recipes(recipes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[recipe]]
id = "team-1"
title = "Debounced search input"
description = "Debounce a text input before firing a search."
category = "forms"
tags = ["forms", "debounce"]
author = "Frontend Guild"
created_at = "2024-05-02"
code = '''
export function useDebounce(value, delay) {
  // ...
}
'''
"#;

    #[test]
    fn loads_recipes_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("forms.toml");
        fs::write(&path, SAMPLE).unwrap();

        let recipes = load_file(&path).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "team-1");
        assert_eq!(recipes[0].tags, vec!["forms", "debounce"]);
        assert!(recipes[0].code.contains("useDebounce"));
    }

    #[test]
    fn loads_directory_in_file_name_order() {
        let temp = tempdir().unwrap();

        fs::write(
            temp.path().join("b.toml"),
            "[[recipe]]\nid = \"b\"\ntitle = \"B\"\ncategory = \"utils\"\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("a.toml"),
            "[[recipe]]\nid = \"a\"\ntitle = \"A\"\ncategory = \"utils\"\n",
        )
        .unwrap();
        // Ignored: wrong extension
        fs::write(temp.path().join("notes.md"), "# not a recipe").unwrap();

        let recipes = load_dir(temp.path()).unwrap();

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("no-such-dir");

        let err = load_dir(&missing).unwrap_err();
        assert!(matches!(err, LoadError::DirectoryNotFound(_)));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[[recipe]\nid = ").unwrap();

        let err = load_dir(temp.path()).unwrap_err();
        match err {
            LoadError::ParseError { path, .. } => assert!(path.contains("broken.toml")),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn catalog_without_user_dir_is_builtin() {
        let registry = load_catalog(None).unwrap();

        assert_eq!(registry.len(), builtin_recipes().len());
    }

    #[test]
    fn catalog_merges_user_recipes_after_builtin() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("forms.toml"), SAMPLE).unwrap();

        let registry = load_catalog(Some(temp.path())).unwrap();

        assert_eq!(registry.len(), builtin_recipes().len() + 1);
        assert!(registry.contains("team-1"));
        // User recipes come after the built-in set
        assert_eq!(registry.all().last().unwrap().id, "team-1");
    }

    #[test]
    fn catalog_rejects_id_collision_with_builtin() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("clash.toml"),
            "[[recipe]]\nid = \"1\"\ntitle = \"Clash\"\ncategory = \"utils\"\n",
        )
        .unwrap();

        let err = load_catalog(Some(temp.path())).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Registry(RegistryError::DuplicateId(id)) if id == "1"
        ));
    }
}
