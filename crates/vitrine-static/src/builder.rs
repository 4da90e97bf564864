//! Landing page builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use vitrine_config::SiteConfig;

use crate::assets::{AssetPipeline, StylesheetSource, ASSETS_DIR};
use crate::document::{render_page, STYLESHEET};
use crate::sections::SectionKind;
use crate::templates::TemplateEngine;
use crate::text::{non_empty, slugify};

/// Slug used when the site has no usable name.
pub const DEFAULT_SLUG: &str = "site";

/// Configuration for building a landing page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; logo paths and the stylesheet template resolve against it
    pub root: PathBuf,

    /// Directory that receives one subdirectory per site
    pub output_dir: PathBuf,

    /// Minify the emitted stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("sites"),
            minify: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Generated `index.html`
    pub index_path: PathBuf,

    /// Site slug (name of the output subdirectory)
    pub slug: String,

    /// Sections rendered, in page order
    pub sections: Vec<SectionKind>,

    /// Whether a logo was copied
    pub logo: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Logo not found: {0}")]
    LogoNotFound(String),

    #[error("Failed to read asset: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Builds one landing page per site description.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the landing page for `site` and return where it was written.
    ///
    /// The document is rendered completely before `index.html` is written, so
    /// a failure never leaves a half-written page behind.
    pub fn build(&self, site: &SiteConfig) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let slug = resolve_slug(site);
        let site_dir = self.config.output_dir.join(&slug);
        tracing::info!("Building site '{}' into {}", slug, site_dir.display());

        fs::create_dir_all(site_dir.join(ASSETS_DIR))
            .map_err(|e| BuildError::WriteError(format!("{}: {}", site_dir.display(), e)))?;

        let logo = self.copy_logo(site, &site_dir)?;

        let page = render_page(&self.templates, site, logo.as_deref())
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let index_path = site_dir.join("index.html");
        fs::write(&index_path, &page.html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", index_path.display(), e)))?;

        self.write_stylesheet(&site_dir)?;

        Ok(BuildResult {
            index_path,
            slug,
            sections: page.sections,
            logo: logo.is_some(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Copy the configured logo, if any, into the site's asset directory.
    fn copy_logo(&self, site: &SiteConfig, site_dir: &Path) -> Result<Option<String>, BuildError> {
        let Some(logo) = non_empty(site.site.logo.as_deref()) else {
            return Ok(None);
        };

        let source = self.config.root.join(logo);
        if !source.is_file() {
            return Err(BuildError::LogoNotFound(logo.to_string()));
        }

        let markup_path = AssetPipeline::copy_logo(&source, site_dir)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", source.display(), e)))?;
        tracing::debug!("Copied logo {} to {}", source.display(), markup_path);

        Ok(Some(markup_path))
    }

    /// Write `style.css` from the shared template or the built-in stylesheet.
    fn write_stylesheet(&self, site_dir: &Path) -> Result<(), BuildError> {
        let (css, source) = AssetPipeline::load_stylesheet(&self.config.root)
            .map_err(|e| BuildError::ReadError(format!("Failed to read stylesheet: {}", e)))?;

        match &source {
            StylesheetSource::Template(path) => {
                tracing::debug!("Using stylesheet template {}", path.display())
            }
            StylesheetSource::BuiltIn => tracing::warn!(
                "Stylesheet template not found under {}, using built-in stylesheet",
                self.config.root.display()
            ),
        }

        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Keeping unminified stylesheet: {}", e);
                    css
                }
            }
        } else {
            css
        };

        let path = site_dir.join(STYLESHEET);
        fs::write(&path, css)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
    }
}

/// Output slug: top-level slug, then `site.slug`, then the slugified name.
pub fn resolve_slug(site: &SiteConfig) -> String {
    if let Some(slug) = non_empty(site.slug.as_deref()).or(non_empty(site.site.slug.as_deref())) {
        return slug.to_string();
    }
    slugify(site.site.name.as_deref().unwrap_or(""), DEFAULT_SLUG)
}
