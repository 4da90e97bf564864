//! Static landing page generator.
//!
//! Renders a single-page marketing site from a [`vitrine_config::SiteConfig`]:
//! section builders produce escaped HTML fragments, the document assembler
//! joins them with navigation and theme variables, and the builder writes the
//! result with its stylesheet and logo.

pub mod assets;
pub mod builder;
pub mod document;
pub mod fragment;
pub mod sections;
pub mod templates;
pub mod text;

pub use builder::{resolve_slug, BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use document::{render_page, RenderedPage};
pub use fragment::Fragment;
pub use sections::{NavEntry, SectionKind};
pub use text::{escape, list, paragraphs, slugify};
