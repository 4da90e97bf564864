//! Asset pipeline for the stylesheet and the logo.

use std::fs;
use std::path::{Path, PathBuf};

/// Directory inside each site that holds copied assets.
pub const ASSETS_DIR: &str = "assets";

/// Location of the shared stylesheet template, relative to the project root.
pub const STYLESHEET_TEMPLATE: &str = "templates/base/style.css";

/// Where the emitted stylesheet came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetSource {
    /// The shared template on disk
    Template(PathBuf),
    /// The stylesheet compiled into the binary
    BuiltIn,
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The built-in landing page stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Load the shared stylesheet template, falling back to the built-in one.
    pub fn load_stylesheet(root: &Path) -> std::io::Result<(String, StylesheetSource)> {
        let template = root.join(STYLESHEET_TEMPLATE);
        if template.is_file() {
            let css = fs::read_to_string(&template)?;
            return Ok((css, StylesheetSource::Template(template)));
        }
        Ok((Self::generate_css(), StylesheetSource::BuiltIn))
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

    /// Copy a logo into the site's asset directory.
    ///
    /// Returns the path to use in markup, relative to `index.html`.
    pub fn copy_logo(source: &Path, site_dir: &Path) -> std::io::Result<String> {
        let file_name = source
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("logo");

        let assets_dir = site_dir.join(ASSETS_DIR);
        fs::create_dir_all(&assets_dir)?;
        fs::copy(source, assets_dir.join(file_name))?;

        Ok(format!("{}/{}", ASSETS_DIR, file_name))
    }
}

const DEFAULT_CSS: &str = r#"/* Landing page theme - colors come from the --color-* variables set in index.html */

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: "Poppins", system-ui, -apple-system, sans-serif;
  background: var(--color-background);
  color: var(--color-text);
  line-height: 1.6;
}

a {
  color: var(--color-primary);
}

/* Navigation */
.top-nav {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 2rem;
  background: #ffffff;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
}

.brand-logo {
  height: 40px;
}

.brand-name {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--color-secondary);
}

.nav-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1.25rem;
}

.nav-links a {
  color: var(--color-text);
  text-decoration: none;
  font-weight: 500;
}

.nav-links a:hover {
  color: var(--color-primary);
}

/* Hero */
.hero {
  padding: 6rem 2rem;
  background: linear-gradient(135deg, var(--color-primary), var(--color-secondary));
  color: #ffffff;
  text-align: center;
}

.hero-content {
  max-width: 760px;
  margin: 0 auto;
}

.hero-logo {
  max-height: 96px;
  margin-bottom: 1.5rem;
}

.hero h1 {
  font-size: 2.75rem;
  line-height: 1.2;
  margin-bottom: 1rem;
}

.subheadline {
  font-size: 1.2rem;
  opacity: 0.9;
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 2rem;
}

.hero-bullets {
  list-style: none;
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1.5rem;
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 0.85rem 1.75rem;
  border-radius: 999px;
  font-weight: 600;
  text-decoration: none;
  transition: transform 0.15s, opacity 0.15s;
}

.btn:hover {
  transform: translateY(-2px);
  opacity: 0.92;
}

.btn.primary {
  background: var(--color-accent);
  color: #ffffff;
}

.btn.secondary {
  background: transparent;
  border: 2px solid #ffffff;
  color: #ffffff;
}

.btn.accent {
  background: var(--color-accent);
  color: #ffffff;
}

/* Sections */
.section {
  padding: 5rem 2rem;
  max-width: 1100px;
  margin: 0 auto;
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.eyebrow {
  display: inline-block;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  font-size: 0.8rem;
  font-weight: 600;
  color: var(--color-accent);
  margin-bottom: 0.5rem;
}

.section-header h2 {
  font-size: 2rem;
  color: var(--color-secondary);
}

.section-body p {
  margin-bottom: 1rem;
}

.highlight-list {
  margin-top: 1.5rem;
  padding-left: 1.25rem;
}

.service-grid,
.testimonial-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.service-card,
.testimonial {
  background: #ffffff;
  border-radius: 1rem;
  padding: 2rem;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}

.service-icon {
  font-size: 2rem;
  margin-bottom: 0.75rem;
}

.service-card h3 {
  margin-bottom: 0.5rem;
  color: var(--color-primary);
}

.quote {
  font-style: italic;
  margin-bottom: 1rem;
}

.author {
  font-weight: 600;
}

.author span {
  display: block;
  font-weight: 400;
  font-size: 0.9rem;
  opacity: 0.7;
}

/* FAQ */
.faq-list {
  max-width: 760px;
  margin: 0 auto;
}

.faq-item {
  background: #ffffff;
  border-radius: 0.75rem;
  padding: 1rem 1.5rem;
  margin-bottom: 1rem;
}

.faq-item summary {
  cursor: pointer;
  font-weight: 600;
}

.faq-answer {
  margin-top: 0.75rem;
}

/* Call to action */
.cta-box {
  text-align: center;
  padding: 3rem 2rem;
  border-radius: 1.5rem;
  background: var(--color-secondary);
  color: #ffffff;
}

.cta-box h2 {
  margin-bottom: 0.75rem;
}

.cta-box p {
  margin-bottom: 1.5rem;
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.contact-card {
  background: #ffffff;
  border-radius: 1rem;
  padding: 2rem;
}

.contact-list {
  list-style: none;
  margin-bottom: 1.5rem;
}

.contact-list li {
  margin-bottom: 0.5rem;
}

.contact-hours ul {
  padding-left: 1.25rem;
  margin-bottom: 1.5rem;
}

.contact-social {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.contact-map iframe {
  width: 100%;
  min-height: 320px;
  border: 0;
  border-radius: 1rem;
}

/* Footer */
.site-footer {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  padding: 2rem;
  background: var(--color-secondary);
  color: #ffffff;
}

.footer-links {
  display: flex;
  gap: 1rem;
}

.footer-links a {
  color: #ffffff;
}

@media (max-width: 720px) {
  .top-nav {
    flex-direction: column;
  }

  .hero {
    padding: 4rem 1.25rem;
  }

  .hero h1 {
    font-size: 2rem;
  }

  .section {
    padding: 3.5rem 1.25rem;
  }
}
"#;
