//! Local browse server for the recipe catalog.
//!
//! Serves HTML index and detail views plus a read-only JSON API, with file
//! watching and WebSocket-based live reload of the recipes directory.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{BrowseServer, BrowseServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{LiveReloadHub, LiveReloadMessage};
