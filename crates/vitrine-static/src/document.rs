//! Page assembly.

use minijinja::{context, Error};

use vitrine_config::{SiteConfig, Theme};

use crate::fragment::Fragment;
use crate::sections::{build_footer, build_nav, NavEntry, SectionKind};
use crate::templates::TemplateEngine;
use crate::text::non_empty;

/// Title used when neither SEO nor site name is configured.
pub const DEFAULT_TITLE: &str = "Site de Demonstração";

/// Description used when neither SEO description nor tagline is configured.
pub const DEFAULT_DESCRIPTION: &str = "Criação de sites profissionais.";

/// Stylesheet file name, relative to the page.
pub const STYLESHEET: &str = "style.css";

/// A section that made it onto the page.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: Fragment,
}

/// A fully rendered landing page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Complete HTML document
    pub html: String,

    /// Navigation entries, one per rendered section
    pub nav: Vec<NavEntry>,

    /// Sections in page order
    pub sections: Vec<SectionKind>,
}

/// Render every present section and assemble the page.
///
/// Sections and navigation entries are collected from the same loop, so the
/// nav can only link to anchors that exist on the page.
pub fn render_page(
    engine: &TemplateEngine,
    config: &SiteConfig,
    logo: Option<&str>,
) -> Result<RenderedPage, Error> {
    let mut sections = Vec::new();
    let mut nav = Vec::new();

    for kind in SectionKind::ALL {
        let html = kind.build(engine, config, logo)?;
        if html.is_empty() {
            tracing::debug!("Skipping section {}", kind.anchor());
            continue;
        }
        tracing::debug!("Rendered section {}", kind.anchor());
        nav.push(kind.nav_entry());
        sections.push(RenderedSection { kind, html });
    }

    let footer = build_footer(engine, config.footer.as_ref(), &config.site)?;
    let html = assemble_document(engine, config, &nav, &sections, &footer, logo)?;

    Ok(RenderedPage {
        html,
        nav,
        sections: sections.iter().map(|s| s.kind).collect(),
    })
}

/// Combine the nav, the section fragments and the footer into a document.
pub fn assemble_document(
    engine: &TemplateEngine,
    config: &SiteConfig,
    nav: &[NavEntry],
    sections: &[RenderedSection],
    footer: &Fragment,
    logo: Option<&str>,
) -> Result<String, Error> {
    let nav_html = build_nav(engine, nav, config.site.display_name(), logo)?;
    let theme = &config.site.theme;

    engine.render(
        "page.html",
        context! {
            title => page_title(config),
            description => page_description(config),
            stylesheet => STYLESHEET,
            theme => theme_context(theme),
            nav => nav_html.as_str(),
            sections => sections.iter().map(|s| s.html.as_str()).collect::<Vec<_>>(),
            footer => footer.as_str(),
        },
    )
}

/// SEO title, then site name, then the default.
pub fn page_title(config: &SiteConfig) -> &str {
    non_empty(config.seo.title.as_deref())
        .or(non_empty(config.site.name.as_deref()))
        .unwrap_or(DEFAULT_TITLE)
}

/// SEO description, then site tagline, then top-level tagline, then the default.
pub fn page_description(config: &SiteConfig) -> &str {
    non_empty(config.seo.description.as_deref())
        .or(non_empty(config.site.tagline.as_deref()))
        .or(non_empty(config.tagline.as_deref()))
        .unwrap_or(DEFAULT_DESCRIPTION)
}

fn theme_context(theme: &Theme) -> minijinja::Value {
    context! {
        primary => theme.primary(),
        secondary => theme.secondary(),
        accent => theme.accent(),
        background => theme.background(),
        text => theme.text(),
    }
}
