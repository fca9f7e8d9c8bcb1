//! Catalog listing commands.

use anyhow::Result;
use recipebook_catalog::{load_catalog, Recipe, RecipeRegistry};

use crate::config;

/// Load the catalog configured for this project.
fn catalog() -> Result<RecipeRegistry> {
    let config = config::load()?;
    Ok(load_catalog(config.recipes_dir().as_deref())?)
}

/// Run the list command.
pub fn run(category: Option<&str>, tag: Option<&str>, json: bool) -> Result<()> {
    let registry = catalog()?;

    let recipes: Vec<&Recipe> = registry
        .iter()
        .filter(|r| category.is_none_or(|c| r.category == c))
        .filter(|r| tag.is_none_or(|t| r.has_tag(t)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    for recipe in &recipes {
        let marker = if recipe.is_placeholder() {
            "  (coming soon)"
        } else {
            ""
        };
        println!(
            "{:>12}  {:<18}  {}{}",
            recipe.id, recipe.category, recipe.title, marker
        );
    }

    println!();
    println!("{} recipes", recipes.len());

    Ok(())
}

/// Run the categories command.
pub fn categories() -> Result<()> {
    let registry = catalog()?;

    for category in registry.categories() {
        println!("{:<20}  {}", category, registry.by_category(category).len());
    }

    Ok(())
}

/// Run the tags command.
pub fn tags() -> Result<()> {
    let registry = catalog()?;

    for tag in registry.tags() {
        println!("{:<20}  {}", tag, registry.by_tag(tag).len());
    }

    Ok(())
}
