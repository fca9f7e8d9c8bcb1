//! Browse server command.

use anyhow::Result;
use recipebook_server::{BrowseServer, BrowseServerConfig};

use crate::config;

/// Run the browse server.
pub async fn run(port: u16, open: bool) -> Result<()> {
    let file_config = config::load()?;

    tracing::info!("Starting browse server on port {}", port);

    let server_config = BrowseServerConfig {
        recipes_dir: file_config.recipes_dir(),
        port,
        open,
        title: file_config.catalog.title.clone(),
        ..Default::default()
    };

    BrowseServer::new(server_config).start().await?;

    Ok(())
}
