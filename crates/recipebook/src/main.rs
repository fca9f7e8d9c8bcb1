//! Recipebook CLI - browse and publish a catalog of frontend code recipes.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Browse and publish a catalog of frontend code recipes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a recipe catalog in the current project
    Init {
        /// Skip interactive prompts, use defaults
        #[arg(short, long)]
        yes: bool,
    },

    /// List recipes, optionally filtered by category or tag
    List {
        /// Only recipes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only recipes carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single recipe in full
    Show {
        /// Recipe id
        id: String,

        /// Emit JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// List categories with recipe counts
    Categories,

    /// List tags with recipe counts
    Tags,

    /// Start the browse server with live reload
    Dev {
        /// Port to listen on
        #[arg(short, long, default_value = "7878")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Build the static catalog site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Preview a built catalog site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::List {
            category,
            tag,
            json,
        } => {
            commands::list::run(category.as_deref(), tag.as_deref(), json)?;
        }
        Commands::Show { id, json } => {
            commands::show::run(&id, json)?;
        }
        Commands::Categories => {
            commands::list::categories()?;
        }
        Commands::Tags => {
            commands::list::tags()?;
        }
        Commands::Dev { port, no_open } => {
            commands::dev::run(port, !no_open).await?;
        }
        Commands::Build { output, no_minify } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(output, minify).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(port, dir).await?;
        }
    }

    Ok(())
}
