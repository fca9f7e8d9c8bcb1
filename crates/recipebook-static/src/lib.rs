//! Static site generator for the recipe catalog.
//!
//! Builds a browsable HTML site from the recipe registry: an index of
//! recipe cards grouped by category, a detail page per recipe, and a
//! listing page per category.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
