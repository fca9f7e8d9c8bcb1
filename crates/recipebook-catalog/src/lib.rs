//! Recipe catalog data model and registry.
//!
//! This crate provides the `Recipe` record type, the read-only `RecipeRegistry`
//! with id/category/tag lookups, the built-in catalog data, and loaders for
//! user-provided recipe files.

pub mod builtin;
pub mod loader;
pub mod recipe;
pub mod registry;

pub use builtin::{builtin, builtin_recipes};
pub use loader::{load_catalog, load_dir, load_file, CatalogError, LoadError};
pub use recipe::Recipe;
pub use registry::{RecipeRegistry, RegistryError};
