//! Vitrine CLI - landing page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Generate a static landing page from a JSON site description")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON site description
    config: PathBuf,

    /// Output directory (defaults to <root>/sites)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Project root used to resolve the logo and the stylesheet template
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Minify the generated stylesheet
    #[arg(long)]
    minify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let index_path = commands::build::run(&cli.config, cli.output, cli.root, cli.minify)?;
    println!("Site gerado em {}", index_path.display());

    Ok(())
}
