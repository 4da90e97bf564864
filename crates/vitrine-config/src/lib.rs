//! Landing page configuration.
//!
//! This crate provides the typed model of a site description (branding, SEO,
//! optional page sections) and the loader that reads it from a JSON file.

pub mod loader;
mod scalar;
pub mod sections;
pub mod site;

pub use loader::{load_config, parse_config, ConfigError};
pub use sections::{
    AboutSection, CallToAction, ContactSection, CtaSection, FaqItem, FaqSection, FooterLink,
    FooterSection, HeroSection, ServiceItem, ServicesSection, SocialLink, Testimonial,
    TestimonialsSection,
};
pub use site::{Seo, SiteConfig, SiteInfo, Theme};
