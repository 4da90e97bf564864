//! Landing page build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vitrine_config::load_config;
use vitrine_static::{BuildConfig, SiteBuilder};

/// Run the build command and return the generated `index.html`.
pub fn run(config_path: &Path, output: Option<PathBuf>, root: PathBuf, minify: bool) -> Result<PathBuf> {
    let site = load_config(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    tracing::info!("Loaded config from {}", config_path.display());

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| root.join("sites")),
        root,
        minify,
    };

    let result = SiteBuilder::new(config)
        .build(&site)
        .context("Failed to build site")?;

    tracing::info!(
        "Built '{}' with {} sections in {}ms",
        result.slug,
        result.sections.len(),
        result.duration_ms
    );

    Ok(result.index_path)
}
