//! Initialize a recipe catalog in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing recipebook...");

    let recipes_dir = Path::new("recipes");

    // Check if recipes already exists
    if recipes_dir.exists() {
        if !yes {
            tracing::warn!("recipes/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(recipes_dir).context("Failed to create recipes directory")?;
    }

    // Create default config
    let config_path = Path::new("recipebook.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write recipebook.toml")?;
        tracing::info!("Created recipebook.toml");
    }

    // Create an example recipe file
    let example_path = recipes_dir.join("example.toml");
    if !example_path.exists() || yes {
        fs::write(&example_path, DEFAULT_RECIPE).context("Failed to write example.toml")?;
        tracing::info!("Created recipes/example.toml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'recipebook dev' to browse the catalog.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Recipebook Configuration

[catalog]
# Directory of your own recipe files (merged with the built-in catalog)
dir = "recipes"

# Output directory for the built site
output = "dist"

# Site title
title = "Frontend Recipes"

# Base URL (for deployment)
base_url = "/"

[build]
# Enable CSS minification
minify = true
"#;

const DEFAULT_RECIPE: &str = r#"# An example recipe file. One file may hold any number of [[recipe]] tables.
# Every id must be unique across the whole catalog.

[[recipe]]
id = "example-debounce"
title = "Debounced value hook"
description = "Delay propagation of a changing value, e.g. for search inputs."
category = "utils"
tags = ["utils", "hooks", "debounce"]
author = "Frontend Guild"
created_at = "2024-05-02"
code = '''
import { useEffect, useState } from 'react';

export function useDebounce<T>(value: T, delay = 300): T {
  const [debounced, setDebounced] = useState(value);

  useEffect(() => {
    const timer = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(timer);
  }, [value, delay]);

  return debounced;
}
'''
"#;
