//! Single recipe detail command.

use anyhow::Result;
use recipebook_catalog::load_catalog;

use crate::config;

/// Run the show command.
pub fn run(id: &str, json: bool) -> Result<()> {
    let config = config::load()?;
    let registry = load_catalog(config.recipes_dir().as_deref())?;

    let Some(recipe) = registry.get(id) else {
        // Absence is expected; report it plainly and exit nonzero
        anyhow::bail!("Recipe not found: {id}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    println!("{}", recipe.title);
    println!("category: {}", recipe.category);
    if !recipe.tags.is_empty() {
        println!("tags:     {}", recipe.tags.join(", "));
    }
    if !recipe.author.is_empty() {
        println!("author:   {}", recipe.author);
    }
    if !recipe.created_at.is_empty() {
        println!("created:  {}", recipe.created_at);
    }
    if !recipe.description.is_empty() {
        println!();
        println!("{}", recipe.description);
    }

    println!();
    if recipe.is_placeholder() {
        println!("(no example code yet)");
    } else {
        println!("{}", recipe.code);
    }

    Ok(())
}
