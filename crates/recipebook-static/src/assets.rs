//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* Recipebook theme */

:root {
  --sidebar-width: 260px;
  --content-max-width: 960px;
  --bg: #ffffff;
  --fg: #1c1c1e;
  --muted-bg: #f6f6f7;
  --muted-fg: #6e6e73;
  --border: #e2e2e6;
  --accent: #2a6df4;
  --accent-soft: #e8f0fe;
  --code-bg: #16181d;
  --code-fg: #e6e6eb;
  --radius: 0.5rem;
  --font-sans: system-ui, -apple-system, sans-serif;
  --font-mono: ui-monospace, SFMono-Regular, monospace;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--fg);
  line-height: 1.6;
}

.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: 100vh;
}

/* Sidebar */
.sidebar {
  background: var(--muted-bg);
  border-right: 1px solid var(--border);
  padding: 1.5rem;
  position: sticky;
  top: 0;
  height: 100vh;
  overflow-y: auto;
}

.nav-header {
  margin-bottom: 1.5rem;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.15rem;
  color: var(--fg);
  text-decoration: none;
}

.nav-list {
  list-style: none;
}

.nav-item a {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.4rem 0.6rem;
  color: var(--muted-fg);
  text-decoration: none;
  border-radius: var(--radius);
}

.nav-item a:hover {
  background: var(--accent-soft);
  color: var(--accent);
}

.nav-item.active > a {
  background: var(--accent);
  color: #ffffff;
}

.nav-count {
  font-size: 0.75rem;
  background: var(--border);
  color: var(--muted-fg);
  border-radius: 999px;
  padding: 0 0.45rem;
}

/* Main content */
.main {
  padding: 2.5rem;
  max-width: var(--content-max-width);
}

.page-header {
  margin-bottom: 2rem;
}

.page-header h1 {
  font-size: 2rem;
  font-weight: 700;
}

.page-subtitle {
  color: var(--muted-fg);
}

/* Recipe cards */
.category-section {
  margin-bottom: 2.5rem;
}

.category-section h2 {
  font-size: 1.2rem;
  margin-bottom: 1rem;
  padding-bottom: 0.4rem;
  border-bottom: 1px solid var(--border);
}

.category-section h2 a {
  color: var(--fg);
  text-decoration: none;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
}

.card {
  display: block;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  color: var(--fg);
  text-decoration: none;
  background: var(--bg);
}

.card:hover {
  border-color: var(--accent);
}

.card h3 {
  font-size: 1rem;
  margin-bottom: 0.4rem;
}

.card-description {
  font-size: 0.875rem;
  color: var(--muted-fg);
  margin-bottom: 0.6rem;
}

.card-placeholder {
  opacity: 0.6;
  border-style: dashed;
}

/* Tags */
.tag-list {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
}

.tag {
  font-size: 0.72rem;
  background: var(--accent-soft);
  color: var(--accent);
  border-radius: 999px;
  padding: 0.1rem 0.55rem;
}

/* Recipe detail */
.recipe-header {
  margin-bottom: 1.5rem;
}

.recipe-category a {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--accent);
  text-decoration: none;
}

.recipe-header h1 {
  font-size: 1.75rem;
  margin: 0.25rem 0 0.75rem;
}

.recipe-description {
  color: var(--muted-fg);
  margin-bottom: 0.75rem;
}

.recipe-code {
  background: var(--code-bg);
  color: var(--code-fg);
  border-radius: var(--radius);
  padding: 1.25rem;
  overflow-x: auto;
  font-family: var(--font-mono);
  font-size: 0.85rem;
  line-height: 1.55;
  position: relative;
  margin: 1rem 0;
}

.recipe-code code {
  font-family: inherit;
  background: none;
}

.placeholder-note {
  border: 1px dashed var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  color: var(--muted-fg);
  text-align: center;
  margin: 1rem 0;
}

.recipe-meta {
  display: flex;
  gap: 1rem;
  color: var(--muted-fg);
  font-size: 0.85rem;
  border-top: 1px solid var(--border);
  padding-top: 0.75rem;
}

/* Copy button */
.copy-btn {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
  padding: 0.25rem 0.7rem;
  font-size: 0.72rem;
  font-weight: 500;
  background: rgba(255, 255, 255, 0.12);
  color: var(--code-fg);
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
}

.copy-btn:hover {
  background: rgba(255, 255, 255, 0.22);
}

/* Responsive */
@media (max-width: 900px) {
  .layout {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: static;
    height: auto;
    border-right: none;
    border-bottom: 1px solid var(--border);
  }
}
"#;

const DEFAULT_JS: &str = r#"// Recipebook runtime
(function() {
  'use strict';

  // Highlight the current category in the sidebar
  const currentPath = window.location.pathname;
  document.querySelectorAll('.nav-item a').forEach(function(link) {
    const href = link.getAttribute('href');
    if (href === currentPath || (href !== '/' && currentPath.startsWith(href))) {
      link.parentElement.classList.add('active');
    }
  });

  // Copy-to-clipboard button on code blocks
  document.querySelectorAll('.recipe-code').forEach(function(pre) {
    if (pre.querySelector('.copy-btn')) return;

    const btn = document.createElement('button');
    btn.className = 'copy-btn';
    btn.textContent = 'Copy';
    btn.setAttribute('type', 'button');

    btn.addEventListener('click', async function() {
      const code = pre.querySelector('code');
      const text = code ? code.textContent : pre.textContent;

      try {
        await navigator.clipboard.writeText(text || '');
        btn.textContent = 'Copied!';
        setTimeout(function() { btn.textContent = 'Copy'; }, 2000);
      } catch (err) {
        btn.textContent = 'Error';
        setTimeout(function() { btn.textContent = 'Copy'; }, 2000);
      }
    });

    pre.appendChild(btn);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".card-grid"));
        assert!(css.contains(".recipe-code"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("addEventListener"));
        assert!(js.contains("clipboard"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.card {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }
}
