//! Template engine for rendering catalog pages.

use minijinja::Environment;
use serde::Serialize;

/// A category entry in the sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryNav {
    /// Category label
    pub name: String,
    /// URL path to the category page
    pub path: String,
    /// Number of recipes in the category
    pub count: usize,
}

/// A recipe card on index and category pages.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    /// Rendered description HTML
    pub description_html: String,
    /// URL path to the detail page
    pub path: String,
    pub tags: Vec<String>,
    pub placeholder: bool,
}

/// A category grouping on the index page.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub name: String,
    pub path: String,
    pub recipes: Vec<RecipeCard>,
}

/// Context for the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexContext {
    pub title: String,
    pub site_title: String,
    pub base_url: String,
    pub nav: Vec<CategoryNav>,
    pub sections: Vec<CategorySection>,
    pub recipe_count: usize,
}

/// Context for a recipe detail page.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeContext {
    pub title: String,
    pub site_title: String,
    pub base_url: String,
    pub nav: Vec<CategoryNav>,
    pub id: String,
    pub description_html: String,
    pub category: String,
    pub category_path: String,
    pub code: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: String,
    pub placeholder: bool,
}

/// Context for a category listing page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryContext {
    pub title: String,
    pub site_title: String,
    pub base_url: String,
    pub nav: Vec<CategoryNav>,
    pub category: String,
    pub recipes: Vec<RecipeCard>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        let templates = [
            ("base.html", BASE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("recipe.html", RECIPE_TEMPLATE),
            ("category.html", CATEGORY_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("built-in template is valid");
        }

        Self { env }
    }

    /// Render a page using the named template.
    pub fn render(
        &self,
        template: &str,
        context: &impl Serialize,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <div class="layout">
    <nav class="sidebar">
      {% include "nav.html" %}
    </nav>
    <main class="main">
      {% block content %}{% endblock %}
    </main>
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<div class="nav-header">
  <a href="{{ base_url }}" class="nav-logo">{{ site_title }}</a>
</div>
<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item">
    <a href="{{ item.path }}">{{ item.name }}<span class="nav-count">{{ item.count }}</span></a>
  </li>
{% endfor %}
</ul>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="page-header">
  <h1>{{ site_title }}</h1>
  <p class="page-subtitle">{{ recipe_count }} recipes</p>
</header>

{% for section in sections %}
<section class="category-section">
  <h2><a href="{{ section.path }}">{{ section.name }}</a></h2>
  <div class="card-grid">
    {% for recipe in section.recipes %}
    <a class="card{% if recipe.placeholder %} card-placeholder{% endif %}" href="{{ recipe.path }}">
      <h3>{{ recipe.title }}</h3>
      <div class="card-description">{{ recipe.description_html | safe }}</div>
      <ul class="tag-list">
        {% for tag in recipe.tags %}<li class="tag">{{ tag }}</li>{% endfor %}
      </ul>
    </a>
    {% endfor %}
  </div>
</section>
{% endfor %}
{% endblock %}"##;

const RECIPE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="recipe">
  <header class="recipe-header">
    <p class="recipe-category"><a href="{{ category_path }}">{{ category }}</a></p>
    <h1>{{ title }}</h1>
    <div class="recipe-description">{{ description_html | safe }}</div>
    <ul class="tag-list">
      {% for tag in tags %}<li class="tag">{{ tag }}</li>{% endfor %}
    </ul>
  </header>

  {% if placeholder %}
  <p class="placeholder-note">This recipe does not have example code yet.</p>
  {% else %}
  <pre class="recipe-code"><code>{{ code }}</code></pre>
  {% endif %}

  <footer class="recipe-meta">
    {% if author %}<span>{{ author }}</span>{% endif %}
    {% if created_at %}<time datetime="{{ created_at }}">{{ created_at }}</time>{% endif %}
  </footer>
</article>
{% endblock %}"##;

const CATEGORY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="page-header">
  <h1>{{ category }}</h1>
  <p class="page-subtitle">{{ recipes | length }} recipes</p>
</header>

<div class="card-grid">
  {% for recipe in recipes %}
  <a class="card{% if recipe.placeholder %} card-placeholder{% endif %}" href="{{ recipe.path }}">
    <h3>{{ recipe.title }}</h3>
    <div class="card-description">{{ recipe.description_html | safe }}</div>
    <ul class="tag-list">
      {% for tag in recipe.tags %}<li class="tag">{{ tag }}</li>{% endfor %}
    </ul>
  </a>
  {% endfor %}
</div>
{% endblock %}"##;
