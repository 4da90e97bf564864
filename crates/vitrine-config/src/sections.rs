//! Per-section configuration.
//!
//! Every field is optional. Defaults for display text (titles, headlines)
//! belong to the renderer; these types only carry what the file says.

use serde::Deserialize;

use crate::scalar;

/// A button: rendered only when both `text` and `link` are non-empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CallToAction {
    #[serde(default, deserialize_with = "scalar::text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub link: Option<String>,
}

impl CallToAction {
    /// Text and link, if both are present and non-empty.
    pub fn parts(&self) -> Option<(&str, &str)> {
        match (self.text.as_deref(), self.link.as_deref()) {
            (Some(text), Some(link)) if !text.is_empty() && !link.is_empty() => Some((text, link)),
            _ => None,
        }
    }
}

/// The hero header. Always rendered.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HeroSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub headline: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub subheadline: Option<String>,

    #[serde(default)]
    pub primary_cta: Option<CallToAction>,

    #[serde(default)]
    pub secondary_cta: Option<CallToAction>,

    #[serde(default, deserialize_with = "scalar::text_list")]
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AboutSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    /// Free text; blank lines separate paragraphs
    #[serde(default, deserialize_with = "scalar::text")]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "scalar::text_list")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ServicesSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "scalar::list")]
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ServiceItem {
    #[serde(default, deserialize_with = "scalar::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub description: Option<String>,

    /// Short text or emoji shown above the name
    #[serde(default, deserialize_with = "scalar::text")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TestimonialsSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar::list")]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "scalar::text")]
    pub quote: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FaqSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar::list")]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "scalar::text")]
    pub question: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CtaSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub headline: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub subheadline: Option<String>,

    #[serde(default)]
    pub button: Option<CallToAction>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContactSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub phone: Option<String>,

    /// Number in international format, used verbatim in the wa.me link
    #[serde(default, deserialize_with = "scalar::text")]
    pub whatsapp: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub address: Option<String>,

    /// Embeddable maps URL
    #[serde(default, deserialize_with = "scalar::text")]
    pub maps_link: Option<String>,

    #[serde(default, deserialize_with = "scalar::list")]
    pub social: Vec<SocialLink>,

    #[serde(default, deserialize_with = "scalar::text_list")]
    pub hours: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "scalar::text")]
    pub platform: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FooterSection {
    #[serde(default, deserialize_with = "scalar::text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "scalar::list")]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FooterLink {
    #[serde(default, deserialize_with = "scalar::text")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "scalar::text")]
    pub url: Option<String>,
}
