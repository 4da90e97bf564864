//! Root site configuration.

use serde::Deserialize;

use crate::scalar;
use crate::sections::{
    AboutSection, ContactSection, CtaSection, FaqSection, FooterSection, HeroSection,
    ServicesSection, TestimonialsSection,
};

/// Site name used when the configuration does not provide one.
pub const DEFAULT_SITE_NAME: &str = "Sua Empresa";

/// A complete site description.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Output slug override (takes precedence over `site.slug`)
    #[serde(default, deserialize_with = "scalar::text")]
    pub slug: Option<String>,

    /// Top-level tagline, used as a last resort for the meta description
    #[serde(default, deserialize_with = "scalar::text")]
    pub tagline: Option<String>,

    /// Branding and theme
    #[serde(default)]
    pub site: SiteInfo,

    /// Search engine metadata
    #[serde(default)]
    pub seo: Seo,

    #[serde(default, deserialize_with = "scalar::section")]
    pub hero: Option<HeroSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub about: Option<AboutSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub services: Option<ServicesSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub testimonials: Option<TestimonialsSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub faq: Option<FaqSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub cta: Option<CtaSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub contact: Option<ContactSection>,

    #[serde(default, deserialize_with = "scalar::section")]
    pub footer: Option<FooterSection>,
}

/// Branding information.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteInfo {
    /// Display name of the business
    #[serde(default, deserialize_with = "scalar::text")]
    pub name: Option<String>,

    /// Output slug
    #[serde(default, deserialize_with = "scalar::text")]
    pub slug: Option<String>,

    /// Short tagline, used as hero headline and meta description fallback
    #[serde(default, deserialize_with = "scalar::text")]
    pub tagline: Option<String>,

    /// Logo path, relative to the project root
    #[serde(default, deserialize_with = "scalar::text")]
    pub logo: Option<String>,

    /// Color palette, read from the `*_color` keys
    #[serde(flatten)]
    pub theme: Theme,
}

impl SiteInfo {
    /// Site name, or the generic placeholder when none is configured.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }
}

/// Search engine metadata.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Seo {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub description: Option<String>,
}

/// The five theme colors exposed as CSS variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Theme {
    #[serde(default, deserialize_with = "scalar::text")]
    pub primary_color: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub secondary_color: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub accent_color: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub background_color: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub text_color: Option<String>,
}

impl Theme {
    pub const DEFAULT_PRIMARY: &'static str = "#1b6ef3";
    pub const DEFAULT_SECONDARY: &'static str = "#123a9a";
    pub const DEFAULT_ACCENT: &'static str = "#f97316";
    pub const DEFAULT_BACKGROUND: &'static str = "#f7f9fc";
    pub const DEFAULT_TEXT: &'static str = "#1f2933";

    pub fn primary(&self) -> &str {
        self.primary_color.as_deref().unwrap_or(Self::DEFAULT_PRIMARY)
    }

    pub fn secondary(&self) -> &str {
        self.secondary_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_SECONDARY)
    }

    pub fn accent(&self) -> &str {
        self.accent_color.as_deref().unwrap_or(Self::DEFAULT_ACCENT)
    }

    pub fn background(&self) -> &str {
        self.background_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_BACKGROUND)
    }

    pub fn text(&self) -> &str {
        self.text_color.as_deref().unwrap_or(Self::DEFAULT_TEXT)
    }
}
