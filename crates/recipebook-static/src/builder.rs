//! Static site builder.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use recipebook_catalog::{load_catalog, Recipe, RecipeRegistry};

use crate::assets::AssetPipeline;
use crate::templates::{
    CategoryContext, CategoryNav, CategorySection, IndexContext, RecipeCard, RecipeContext,
    TemplateEngine,
};

/// Configuration for building the static catalog site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory of user recipe files, in addition to the built-in catalog
    pub recipes_dir: Option<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            recipes_dir: None,
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "Frontend Recipes".to_string(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of recipes in the catalog
    pub recipes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Conflicting page path: {0}")]
    PathError(String),
}

/// Static site builder for the recipe catalog.
pub struct SiteBuilder {
    config: BuildConfig,
    registry: RecipeRegistry,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    ///
    /// A failing recipes directory is logged and the build falls back to
    /// the built-in catalog.
    pub fn new(config: BuildConfig) -> Self {
        let registry = match load_catalog(config.recipes_dir.as_deref()) {
            Ok(registry) => {
                tracing::info!("Catalog holds {} recipes", registry.len());
                registry
            }
            Err(e) => {
                tracing::warn!("Failed to load recipes: {}; using built-in catalog", e);
                load_catalog(None).expect("built-in catalog is valid")
            }
        };

        Self {
            config,
            registry,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        self.check_recipe_paths()?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let nav = self.build_nav();

        // Index page
        self.build_index(&nav)?;
        let mut pages = 1;

        // Detail pages in parallel
        let results: Vec<Result<(), BuildError>> = self
            .registry
            .all()
            .par_iter()
            .map(|recipe| self.build_recipe_page(recipe, &nav))
            .collect();

        for result in results {
            result?;
            pages += 1;
        }

        // Category listing pages
        for category in self.registry.categories() {
            self.build_category_page(category, &nav)?;
            pages += 1;
        }

        self.generate_assets()?;
        self.generate_search_index()?;
        self.generate_sitemap()?;

        Ok(BuildResult {
            pages,
            recipes: self.registry.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Verify that every recipe gets its own page path.
    ///
    /// Ids are opaque strings, so distinct ids can normalize to the same
    /// URL slug (or to an empty one). The build fails on such a catalog
    /// instead of overwriting one detail page with another.
    fn check_recipe_paths(&self) -> Result<(), BuildError> {
        let mut by_slug: HashMap<String, &str> = HashMap::new();

        for recipe in self.registry.iter() {
            let slug = slugify(&recipe.id);

            if slug.is_empty() {
                return Err(BuildError::PathError(format!(
                    "recipe id {:?} maps to an empty page path",
                    recipe.id
                )));
            }

            if let Some(first) = by_slug.insert(slug.clone(), &recipe.id) {
                return Err(BuildError::PathError(format!(
                    "recipe ids {:?} and {:?} both map to recipes/{}/",
                    first, recipe.id, slug
                )));
            }
        }

        Ok(())
    }

    /// Sidebar navigation: one entry per category, first-seen order.
    fn build_nav(&self) -> Vec<CategoryNav> {
        self.registry
            .categories()
            .into_iter()
            .map(|category| CategoryNav {
                name: category.to_string(),
                path: self.category_url(category),
                count: self.registry.by_category(category).len(),
            })
            .collect()
    }

    fn build_index(&self, nav: &[CategoryNav]) -> Result<(), BuildError> {
        let sections: Vec<CategorySection> = self
            .registry
            .categories()
            .into_iter()
            .map(|category| CategorySection {
                name: category.to_string(),
                path: self.category_url(category),
                recipes: self
                    .registry
                    .by_category(category)
                    .into_iter()
                    .map(|r| self.card(r))
                    .collect(),
            })
            .collect();

        let context = IndexContext {
            title: "Home".to_string(),
            site_title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            nav: nav.to_vec(),
            sections,
            recipe_count: self.registry.len(),
        };

        let html = self
            .templates
            .render("index.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        self.write_page(&self.config.output_dir.join("index.html"), &html)
    }

    fn build_recipe_page(&self, recipe: &Recipe, nav: &[CategoryNav]) -> Result<(), BuildError> {
        let context = RecipeContext {
            title: recipe.title.clone(),
            site_title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            nav: nav.to_vec(),
            id: recipe.id.clone(),
            description_html: render_markdown(&recipe.description),
            category: recipe.category.clone(),
            category_path: self.category_url(&recipe.category),
            code: recipe.code.clone(),
            tags: recipe.tags.clone(),
            author: recipe.author.clone(),
            created_at: recipe.created_at.clone(),
            placeholder: recipe.is_placeholder(),
        };

        let html = self
            .templates
            .render("recipe.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let path = self
            .config
            .output_dir
            .join("recipes")
            .join(slugify(&recipe.id))
            .join("index.html");

        self.write_page(&path, &html)
    }

    fn build_category_page(&self, category: &str, nav: &[CategoryNav]) -> Result<(), BuildError> {
        let context = CategoryContext {
            title: category.to_string(),
            site_title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            nav: nav.to_vec(),
            category: category.to_string(),
            recipes: self
                .registry
                .by_category(category)
                .into_iter()
                .map(|r| self.card(r))
                .collect(),
        };

        let html = self
            .templates
            .render("category.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let path = self
            .config
            .output_dir
            .join("categories")
            .join(slugify(category))
            .join("index.html");

        self.write_page(&path, &html)
    }

    fn card(&self, recipe: &Recipe) -> RecipeCard {
        RecipeCard {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description_html: render_markdown(&recipe.description),
            path: self.recipe_url(&recipe.id),
            tags: recipe.tags.clone(),
            placeholder: recipe.is_placeholder(),
        }
    }

    fn recipe_url(&self, id: &str) -> String {
        format!("{}recipes/{}/", self.config.base_url, slugify(id))
    }

    fn category_url(&self, category: &str) -> String {
        format!("{}categories/{}/", self.config.base_url, slugify(category))
    }

    fn write_page(&self, path: &Path, html: &str) -> Result<(), BuildError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        fs::write(path, html).map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate a search index over the catalog metadata.
    fn generate_search_index(&self) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = self
            .registry
            .iter()
            .map(|recipe| {
                serde_json::json!({
                    "id": recipe.id,
                    "title": recipe.title,
                    "description": recipe.description,
                    "category": recipe.category,
                    "tags": recipe.tags,
                    "url": self.recipe_url(&recipe.id),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let mut urls = vec![self.config.base_url.clone()];
        urls.extend(self.registry.iter().map(|r| self.recipe_url(&r.id)));
        urls.extend(
            self.registry
                .categories()
                .into_iter()
                .map(|c| self.category_url(c)),
        );

        let entries: Vec<String> = urls
            .iter()
            .map(|url| format!("  <url>\n    <loc>{}</loc>\n  </url>", url))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            entries.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }
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

/// Convert a label or id to a URL-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_catalog_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = builder.build().await.unwrap();

        // Index + one page per recipe + one page per category
        assert_eq!(result.recipes, 17);
        assert_eq!(result.pages, 1 + 17 + 17);
        assert!(out.join("index.html").exists());
        assert!(out.join("recipes/1/index.html").exists());
        assert!(out.join("recipes/473287328/index.html").exists());
        assert!(out.join("categories/styling/index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
        assert!(out.join("sitemap.xml").exists());
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn detail_page_shows_code_verbatim_escaped() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let html = fs::read_to_string(out.join("recipes/1/index.html")).unwrap();

        assert!(html.contains("tailwind-merge"));
        // Embedded markup from payloads stays escaped
        let fade = fs::read_to_string(out.join("recipes/2/index.html")).unwrap();
        assert!(fade.contains("&lt;motion.div"));
    }

    #[tokio::test]
    async fn generates_search_index() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        assert!(index.contains("Class composition with clsx"));
        assert!(index.contains("/recipes/473287328/"));
    }

    #[tokio::test]
    async fn includes_user_recipes_from_directory() {
        let temp = tempdir().unwrap();
        let recipes = temp.path().join("recipes");
        let out = temp.path().join("dist");

        fs::create_dir_all(&recipes).unwrap();
        fs::write(
            recipes.join("extra.toml"),
            "[[recipe]]\nid = \"team-1\"\ntitle = \"Extra\"\ncategory = \"utils\"\ncode = \"x\"\n",
        )
        .unwrap();

        let result = SiteBuilder::new(BuildConfig {
            recipes_dir: Some(recipes),
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert_eq!(result.recipes, 18);
        assert!(out.join("recipes/team-1/index.html").exists());
    }

    #[tokio::test]
    async fn rejects_distinct_ids_sharing_a_page_path() {
        let temp = tempdir().unwrap();
        let recipes = temp.path().join("recipes");

        // Both valid opaque ids, but they normalize to the same slug
        fs::create_dir_all(&recipes).unwrap();
        fs::write(
            recipes.join("clash.toml"),
            "[[recipe]]\nid = \"My Id\"\ntitle = \"First\"\ncategory = \"utils\"\n\n\
             [[recipe]]\nid = \"my-id\"\ntitle = \"Second\"\ncategory = \"utils\"\n",
        )
        .unwrap();

        let err = SiteBuilder::new(BuildConfig {
            recipes_dir: Some(recipes),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await
        .unwrap_err();

        assert!(matches!(err, BuildError::PathError(_)));
        let message = err.to_string();
        assert!(message.contains("My Id"));
        assert!(message.contains("my-id"));
    }

    #[tokio::test]
    async fn rejects_id_with_empty_page_path() {
        let temp = tempdir().unwrap();
        let recipes = temp.path().join("recipes");

        fs::create_dir_all(&recipes).unwrap();
        fs::write(
            recipes.join("odd.toml"),
            "[[recipe]]\nid = \"***\"\ntitle = \"Odd\"\ncategory = \"utils\"\n",
        )
        .unwrap();

        let err = SiteBuilder::new(BuildConfig {
            recipes_dir: Some(recipes),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await
        .unwrap_err();

        assert!(matches!(err, BuildError::PathError(_)));
        assert!(err.to_string().contains("empty page path"));
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Feature Flags"), "feature-flags");
        assert_eq!(slugify("473287328"), "473287328");
        assert_eq!(slugify("client-state"), "client-state");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
