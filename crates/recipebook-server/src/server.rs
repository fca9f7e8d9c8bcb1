//! Browse server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use recipebook_catalog::{load_catalog, Recipe, RecipeRegistry};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{live_reload_script, LiveReloadHub, LiveReloadMessage};

/// Configuration for the browse server.
#[derive(Debug, Clone)]
pub struct BrowseServerConfig {
    /// Directory of user recipe files, watched for changes
    pub recipes_dir: Option<PathBuf>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title shown in HTML views
    pub title: String,
}

impl Default for BrowseServerConfig {
    fn default() -> Self {
        Self {
            recipes_dir: None,
            port: 7878,
            host: "127.0.0.1".to_string(),
            open: true,
            title: "Frontend Recipes".to_string(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Failed to load catalog: {0}")]
    CatalogError(String),
}

/// Shared server state.
struct ServerState {
    config: BrowseServerConfig,
    registry: RecipeRegistry,
    live: LiveReloadHub,
}

/// Browse server for the recipe catalog.
pub struct BrowseServer {
    config: BrowseServerConfig,
}

impl BrowseServer {
    /// Create a new browse server.
    pub fn new(config: BrowseServerConfig) -> Self {
        Self { config }
    }

    /// Start the browse server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let registry = load_catalog(self.config.recipes_dir.as_deref())
            .map_err(|e| ServerError::CatalogError(e.to_string()))?;

        tracing::info!("Catalog holds {} recipes", registry.len());

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            registry,
            live: LiveReloadHub::new(),
        }));

        // Watch the recipes directory if configured
        if let Some(recipes_dir) = self.config.recipes_dir.clone() {
            let (watcher, mut rx) = FileWatcher::new(&[recipes_dir])
                .map_err(|e| ServerError::WatchError(e.to_string()))?;

            let state_clone = Arc::clone(&state);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    handle_watch_event(&state_clone, event).await;
                }
                // Keep watcher alive
                drop(watcher);
            });
        }

        let app = Router::new()
            .route("/", get(index_handler))
            .route("/recipes/{id}", get(recipe_handler))
            .route("/api/recipes", get(api_list_handler))
            .route("/api/recipes/{id}", get(api_get_handler))
            .route("/api/categories", get(api_categories_handler))
            .route("/api/tags", get(api_tags_handler))
            .route("/__livereload", get(ws_handler))
            .route("/__livereload.js", get(livereload_script_handler))
            .with_state(state);

        tracing::info!("Starting browse server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events by reloading the catalog.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    match event {
        WatchEvent::RecipeModified(path)
        | WatchEvent::Created(path)
        | WatchEvent::Deleted(path)
        | WatchEvent::Modified(path) => {
            tracing::info!("Recipe source changed: {}", path.display());

            let mut state = state.write().await;
            match load_catalog(state.config.recipes_dir.as_deref()) {
                Ok(registry) => {
                    let recipes = registry.len();
                    state.registry = registry;
                    state.live.send(LiveReloadMessage::CatalogChanged { recipes });
                }
                Err(e) => {
                    // Keep serving the last good catalog
                    tracing::warn!("Catalog reload failed: {}", e);
                }
            }
        }
    }
}

/// Query parameters for the recipe list endpoint.
#[derive(Debug, Deserialize)]
struct ListParams {
    category: Option<String>,
    tag: Option<String>,
}

/// Handler for the HTML index page.
async fn index_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;
    Html(render_index(&state.registry, &state.config.title))
}

/// Handler for an HTML recipe detail page.
async fn recipe_handler(
    Path(id): Path<String>,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> Response {
    let state = state.read().await;

    match state.registry.get(&id) {
        Some(recipe) => Html(render_recipe(recipe, &state.config.title)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(render_not_found(&id, &state.config.title)),
        )
            .into_response(),
    }
}

/// Handler for the JSON recipe list, with optional category/tag filters.
async fn api_list_handler(
    Query(params): Query<ListParams>,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> Json<Vec<Recipe>> {
    let state = state.read().await;

    let recipes: Vec<Recipe> = state
        .registry
        .iter()
        .filter(|r| params.category.as_deref().is_none_or(|c| r.category == c))
        .filter(|r| params.tag.as_deref().is_none_or(|t| r.has_tag(t)))
        .cloned()
        .collect();

    Json(recipes)
}

/// Handler for a single JSON recipe. Absence maps to 404, never a fault.
async fn api_get_handler(
    Path(id): Path<String>,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> Response {
    let state = state.read().await;

    match state.registry.get(&id) {
        Some(recipe) => Json(recipe.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Handler for the distinct category list.
async fn api_categories_handler(
    State(state): State<Arc<RwLock<ServerState>>>,
) -> Json<Vec<String>> {
    let state = state.read().await;
    Json(state.registry.categories().iter().map(|c| c.to_string()).collect())
}

/// Handler for the distinct tag list.
async fn api_tags_handler(State(state): State<Arc<RwLock<ServerState>>>) -> Json<Vec<String>> {
    let state = state.read().await;
    Json(state.registry.tags().iter().map(|t| t.to_string()).collect())
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.live.subscribe()
    };

    let msg = serde_json::to_string(&LiveReloadMessage::Connected).expect("message serializes");
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).expect("message serializes");
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the live reload client script.
async fn livereload_script_handler(
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    let state = state.read().await;
    let ws_url = format!(
        "ws://{}:{}/__livereload",
        state.config.host, state.config.port
    );
    let script = live_reload_script(&ws_url);
    ([("content-type", "application/javascript")], script)
}

/// Render the HTML index: recipes grouped by category.
fn render_index(registry: &RecipeRegistry, title: &str) -> String {
    let mut body = format!("<h1>{}</h1>\n", html_escape(title));

    for category in registry.categories() {
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", html_escape(category)));
        for recipe in registry.by_category(category) {
            let marker = if recipe.is_placeholder() {
                " <em>(coming soon)</em>"
            } else {
                ""
            };
            body.push_str(&format!(
                "  <li><a href=\"/recipes/{}\">{}</a>{}</li>\n",
                html_escape(&recipe.id),
                html_escape(&recipe.title),
                marker
            ));
        }
        body.push_str("</ul>\n");
    }

    page_shell(title, &body)
}

/// Render an HTML recipe detail view.
fn render_recipe(recipe: &Recipe, title: &str) -> String {
    let mut body = format!(
        "<p><a href=\"/\">&larr; {}</a></p>\n<h1>{}</h1>\n<p class=\"category\">{}</p>\n{}",
        html_escape(title),
        html_escape(&recipe.title),
        html_escape(&recipe.category),
        render_markdown(&recipe.description)
    );

    if recipe.is_placeholder() {
        body.push_str("<p><em>This recipe does not have example code yet.</em></p>\n");
    } else {
        body.push_str(&format!(
            "<pre><code>{}</code></pre>\n",
            html_escape(&recipe.code)
        ));
    }

    if !recipe.tags.is_empty() {
        let tags: Vec<String> = recipe.tags.iter().map(|t| html_escape(t)).collect();
        body.push_str(&format!("<p class=\"tags\">{}</p>\n", tags.join(" · ")));
    }

    if !recipe.author.is_empty() || !recipe.created_at.is_empty() {
        body.push_str(&format!(
            "<p class=\"meta\">{} {}</p>\n",
            html_escape(&recipe.author),
            html_escape(&recipe.created_at)
        ));
    }

    page_shell(&recipe.title, &body)
}

/// Render the not-found page for an unknown recipe id.
fn render_not_found(id: &str, title: &str) -> String {
    let body = format!(
        "<h1>Recipe not found</h1>\n<p>No recipe with id <code>{}</code>.</p>\n<p><a href=\"/\">Back to {}</a></p>",
        html_escape(id),
        html_escape(title)
    );
    page_shell("Not found", &body)
}

/// Wrap body content in the shared page shell.
fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{}</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 800px; margin: 2rem auto; padding: 0 1rem; line-height: 1.6; }}
    h1 {{ font-size: 1.75rem; }}
    h2 {{ font-size: 1.1rem; margin-top: 1.5rem; border-bottom: 1px solid #ddd; padding-bottom: 0.3rem; }}
    pre {{ background: #16181d; color: #e6e6eb; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; }}
    .category {{ text-transform: uppercase; font-size: 0.8rem; color: #666; letter-spacing: 0.05em; }}
    .tags, .meta {{ color: #666; font-size: 0.85rem; }}
  </style>
</head>
<body>
  {}
  <script src="/__livereload.js"></script>
</body>
</html>"#,
        html_escape(title),
        body
    )
}

/// Escape text for HTML interpolation.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render markdown (descriptions) to HTML.
fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
