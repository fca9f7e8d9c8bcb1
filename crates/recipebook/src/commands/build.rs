//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use recipebook_static::{BuildConfig, SiteBuilder};

use crate::config;

/// Run the build command.
pub async fn run(output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static catalog site...");

    let file_config = config::load()?;

    let build_config = BuildConfig {
        recipes_dir: file_config.recipes_dir(),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.catalog.output)),
        minify: minify.unwrap_or(file_config.build.minify),
        base_url: file_config.catalog.base_url.clone(),
        title: file_config.catalog.title.clone(),
    };

    let result = SiteBuilder::new(build_config).build().await?;

    tracing::info!(
        "Built {} pages for {} recipes in {}ms",
        result.pages,
        result.recipes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
