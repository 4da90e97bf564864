//! Section builders.
//!
//! Each builder turns one section of the site description into a [`Fragment`].
//! Optional sections return an empty fragment when their configuration is
//! absent. Builders never touch the filesystem.

use minijinja::{context, Error};
use serde::Serialize;

use vitrine_config::{
    AboutSection, CallToAction, ContactSection, CtaSection, FaqSection, FooterSection,
    HeroSection, ServicesSection, SiteConfig, SiteInfo, TestimonialsSection,
};

use crate::fragment::Fragment;
use crate::templates::TemplateEngine;
use crate::text::non_empty;

/// The sections of a landing page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Testimonials,
    Faq,
    Cta,
    Contact,
}

impl SectionKind {
    /// Every section in canonical order. Hero is always rendered.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Cta,
        SectionKind::Contact,
    ];

    /// Anchor id of the section container.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "inicio",
            Self::About => "sobre",
            Self::Services => "servicos",
            Self::Testimonials => "depoimentos",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::Contact => "contato",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Início",
            Self::About => "Sobre",
            Self::Services => "Serviços",
            Self::Testimonials => "Depoimentos",
            Self::Faq => "FAQ",
            Self::Cta => "Começar",
            Self::Contact => "Contato",
        }
    }

    pub fn nav_entry(self) -> NavEntry {
        NavEntry {
            id: self.anchor(),
            label: self.label(),
        }
    }

    /// Render this section from the site description.
    pub fn build(
        self,
        engine: &TemplateEngine,
        config: &SiteConfig,
        logo: Option<&str>,
    ) -> Result<Fragment, Error> {
        match self {
            Self::Hero => build_hero(engine, config.hero.as_ref(), &config.site, logo),
            Self::About => build_about(engine, config.about.as_ref()),
            Self::Services => build_services(engine, config.services.as_ref()),
            Self::Testimonials => build_testimonials(engine, config.testimonials.as_ref()),
            Self::Faq => build_faq(engine, config.faq.as_ref()),
            Self::Cta => build_cta(engine, config.cta.as_ref()),
            Self::Contact => build_contact(engine, config.contact.as_ref()),
        }
    }
}

/// A navigation link to a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
struct Button<'a> {
    variant: &'static str,
    text: &'a str,
    link: &'a str,
}

impl<'a> Button<'a> {
    fn from_cta(variant: &'static str, cta: Option<&'a CallToAction>) -> Option<Self> {
        let (text, link) = cta?.parts()?;
        Some(Self {
            variant,
            text,
            link,
        })
    }
}

#[derive(Debug, Serialize)]
struct Link<'a> {
    label: &'a str,
    url: &'a str,
}

/// Top navigation bar. Shows the logo when one was copied, otherwise the name.
pub fn build_nav(
    engine: &TemplateEngine,
    entries: &[NavEntry],
    site_name: &str,
    logo: Option<&str>,
) -> Result<Fragment, Error> {
    let html = engine.render(
        "nav.html",
        context! {
            entries => entries,
            site_name => site_name,
            logo => logo,
        },
    )?;
    Ok(Fragment::trusted(html))
}

/// The hero header. Falls back to the site tagline, then the site name, for
/// the headline.
pub fn build_hero(
    engine: &TemplateEngine,
    hero: Option<&HeroSection>,
    site: &SiteInfo,
    logo: Option<&str>,
) -> Result<Fragment, Error> {
    let default_hero = HeroSection::default();
    let hero = hero.unwrap_or(&default_hero);

    let headline = hero
        .headline
        .as_deref()
        .or(site.tagline.as_deref())
        .or(site.name.as_deref())
        .unwrap_or("");

    let buttons: Vec<Button<'_>> = [
        Button::from_cta("primary", hero.primary_cta.as_ref()),
        Button::from_cta("secondary", hero.secondary_cta.as_ref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let html = engine.render(
        "hero.html",
        context! {
            id => SectionKind::Hero.anchor(),
            logo => logo,
            site_name => site.name.as_deref().unwrap_or(""),
            headline => headline,
            subheadline => hero.subheadline.as_deref().unwrap_or(""),
            buttons => buttons,
            bullet_points => &hero.bullet_points,
        },
    )?;
    Ok(Fragment::trusted(html))
}

pub fn build_about(engine: &TemplateEngine, about: Option<&AboutSection>) -> Result<Fragment, Error> {
    let Some(about) = about else {
        return Ok(Fragment::empty());
    };

    let html = engine.render(
        "about.html",
        context! {
            id => SectionKind::About.anchor(),
            eyebrow => "Quem Somos",
            title => about.title.as_deref().unwrap_or("Sobre"),
            content => about.content.as_deref().unwrap_or(""),
            highlights => &about.highlights,
        },
    )?;
    Ok(Fragment::trusted(html))
}

pub fn build_services(
    engine: &TemplateEngine,
    services: Option<&ServicesSection>,
) -> Result<Fragment, Error> {
    let Some(services) = services else {
        return Ok(Fragment::empty());
    };

    #[derive(Serialize)]
    struct Card<'a> {
        name: &'a str,
        description: &'a str,
        icon: Option<&'a str>,
    }

    let items: Vec<Card<'_>> = services
        .items
        .iter()
        .map(|item| Card {
            name: item.name.as_deref().unwrap_or(""),
            description: item.description.as_deref().unwrap_or(""),
            icon: non_empty(item.icon.as_deref()),
        })
        .collect();

    let html = engine.render(
        "services.html",
        context! {
            id => SectionKind::Services.anchor(),
            eyebrow => "O que fazemos",
            title => services.title.as_deref().unwrap_or("Serviços"),
            description => services.description.as_deref().unwrap_or(""),
            items => items,
        },
    )?;
    Ok(Fragment::trusted(html))
}

pub fn build_testimonials(
    engine: &TemplateEngine,
    testimonials: Option<&TestimonialsSection>,
) -> Result<Fragment, Error> {
    let Some(testimonials) = testimonials else {
        return Ok(Fragment::empty());
    };

    #[derive(Serialize)]
    struct Quote<'a> {
        quote: &'a str,
        name: &'a str,
        role: &'a str,
    }

    let items: Vec<Quote<'_>> = testimonials
        .items
        .iter()
        .map(|item| Quote {
            quote: item.quote.as_deref().unwrap_or(""),
            name: item.name.as_deref().unwrap_or(""),
            role: item.role.as_deref().unwrap_or(""),
        })
        .collect();

    let html = engine.render(
        "testimonials.html",
        context! {
            id => SectionKind::Testimonials.anchor(),
            eyebrow => "Depoimentos",
            title => testimonials.title.as_deref().unwrap_or("Clientes satisfeitos"),
            items => items,
        },
    )?;
    Ok(Fragment::trusted(html))
}

/// FAQ entries render as `<details>` elements, closed by default.
pub fn build_faq(engine: &TemplateEngine, faq: Option<&FaqSection>) -> Result<Fragment, Error> {
    let Some(faq) = faq else {
        return Ok(Fragment::empty());
    };

    #[derive(Serialize)]
    struct Entry<'a> {
        question: &'a str,
        answer: &'a str,
    }

    let items: Vec<Entry<'_>> = faq
        .items
        .iter()
        .map(|item| Entry {
            question: item.question.as_deref().unwrap_or(""),
            answer: item.answer.as_deref().unwrap_or(""),
        })
        .collect();

    let html = engine.render(
        "faq.html",
        context! {
            id => SectionKind::Faq.anchor(),
            eyebrow => "Dúvidas",
            title => faq.title.as_deref().unwrap_or("Perguntas Frequentes"),
            items => items,
        },
    )?;
    Ok(Fragment::trusted(html))
}

pub fn build_cta(engine: &TemplateEngine, cta: Option<&CtaSection>) -> Result<Fragment, Error> {
    let Some(cta) = cta else {
        return Ok(Fragment::empty());
    };

    let html = engine.render(
        "cta.html",
        context! {
            id => SectionKind::Cta.anchor(),
            headline => cta.headline.as_deref().unwrap_or("Pronto para começar?"),
            subheadline => cta
                .subheadline
                .as_deref()
                .unwrap_or("Vamos conversar sobre seu projeto."),
            button => Button::from_cta("accent", cta.button.as_ref()),
        },
    )?;
    Ok(Fragment::trusted(html))
}

/// Contact details. Phone, WhatsApp and e-mail become `tel:`, `wa.me` and
/// `mailto:` links; a maps link becomes an embedded iframe.
pub fn build_contact(
    engine: &TemplateEngine,
    contact: Option<&ContactSection>,
) -> Result<Fragment, Error> {
    let Some(contact) = contact else {
        return Ok(Fragment::empty());
    };

    let hours: Vec<&str> = contact
        .hours
        .iter()
        .map(String::as_str)
        .filter(|h| !h.trim().is_empty())
        .collect();

    let social: Vec<Link<'_>> = contact
        .social
        .iter()
        .filter_map(|item| {
            Some(Link {
                label: non_empty(item.platform.as_deref())?,
                url: non_empty(item.url.as_deref())?,
            })
        })
        .collect();

    let html = engine.render(
        "contact.html",
        context! {
            id => SectionKind::Contact.anchor(),
            eyebrow => "Contato",
            title => contact.title.as_deref().unwrap_or("Fale Conosco"),
            description => contact.description.as_deref().unwrap_or(""),
            phone => non_empty(contact.phone.as_deref()),
            whatsapp => non_empty(contact.whatsapp.as_deref()),
            email => non_empty(contact.email.as_deref()),
            address => non_empty(contact.address.as_deref()),
            maps_link => non_empty(contact.maps_link.as_deref()),
            hours => hours,
            social => social,
        },
    )?;
    Ok(Fragment::trusted(html))
}

/// Page footer. Always rendered; without custom text it shows a copyright
/// line naming the site.
pub fn build_footer(
    engine: &TemplateEngine,
    footer: Option<&FooterSection>,
    site: &SiteInfo,
) -> Result<Fragment, Error> {
    let text = match footer.and_then(|f| non_empty(f.text.as_deref())) {
        Some(text) => text.to_string(),
        None => format!(
            "© {}. Todos os direitos reservados.",
            site.display_name()
        ),
    };

    let links: Vec<Link<'_>> = footer
        .map(|f| f.links.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|link| {
            Some(Link {
                label: non_empty(link.label.as_deref())?,
                url: non_empty(link.url.as_deref())?,
            })
        })
        .collect();

    let html = engine.render("footer.html", context! { text => text, links => links })?;
    Ok(Fragment::trusted(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_config::{
        FaqItem, FooterLink, ServiceItem, SocialLink, Testimonial,
    };

    fn cta(text: Option<&str>, link: Option<&str>) -> Option<CallToAction> {
        Some(CallToAction {
            text: text.map(String::from),
            link: link.map(String::from),
        })
    }

    fn site(name: &str) -> SiteInfo {
        SiteInfo {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn anchors_and_labels_are_canonical() {
        let anchors: Vec<_> = SectionKind::ALL.iter().map(|k| k.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["inicio", "sobre", "servicos", "depoimentos", "faq", "cta", "contato"]
        );
        assert_eq!(SectionKind::Services.nav_entry().label, "Serviços");
    }

    #[test]
    fn hero_headline_falls_back_to_tagline_then_name() {
        let engine = TemplateEngine::new();

        let mut info = site("Acme");
        let html = build_hero(&engine, None, &info, None).unwrap();
        assert!(html.as_str().contains("<h1>Acme</h1>"));

        info.tagline = Some("We build things".to_string());
        let html = build_hero(&engine, None, &info, None).unwrap();
        assert!(html.as_str().contains("<h1>We build things</h1>"));

        let hero = HeroSection {
            headline: Some("Hello".to_string()),
            ..Default::default()
        };
        let html = build_hero(&engine, Some(&hero), &info, None).unwrap();
        assert!(html.as_str().contains("<h1>Hello</h1>"));
        assert!(html.as_str().contains(r#"id="inicio""#));
    }

    #[test]
    fn hero_button_needs_text_and_link() {
        let engine = TemplateEngine::new();
        let info = site("Acme");

        for (text, link) in [(Some("Buy"), None), (None, Some("https://x.test")), (Some(""), Some("https://x.test"))] {
            let hero = HeroSection {
                primary_cta: cta(text, link),
                ..Default::default()
            };
            let html = build_hero(&engine, Some(&hero), &info, None).unwrap();
            assert!(!html.as_str().contains("class=\"btn"), "{text:?} {link:?}");
        }

        let hero = HeroSection {
            primary_cta: cta(Some("Buy"), Some("https://x.test/buy")),
            secondary_cta: cta(Some("More"), None),
            ..Default::default()
        };
        let html = build_hero(&engine, Some(&hero), &info, None).unwrap();
        assert_eq!(html.as_str().matches("class=\"btn").count(), 1);
        assert!(html.as_str().contains(
            r#"<a class="btn primary" href="https://x.test/buy" target="_blank" rel="noopener">Buy</a>"#
        ));
    }

    #[test]
    fn hero_shows_logo_and_bullets() {
        let engine = TemplateEngine::new();
        let hero = HeroSection {
            bullet_points: vec!["Fast".to_string(), " ".to_string()],
            ..Default::default()
        };

        let html = build_hero(&engine, Some(&hero), &site("Acme"), Some("assets/logo.png")).unwrap();

        assert!(html.as_str().contains(r#"<img src="assets/logo.png" alt="Acme" class="hero-logo">"#));
        assert!(html.as_str().contains(r#"<ul class="hero-bullets"><li>Fast</li></ul>"#));
    }

    #[test]
    fn absent_sections_are_empty() {
        let engine = TemplateEngine::new();

        assert!(build_about(&engine, None).unwrap().is_empty());
        assert!(build_services(&engine, None).unwrap().is_empty());
        assert!(build_testimonials(&engine, None).unwrap().is_empty());
        assert!(build_faq(&engine, None).unwrap().is_empty());
        assert!(build_cta(&engine, None).unwrap().is_empty());
        assert!(build_contact(&engine, None).unwrap().is_empty());
    }

    #[test]
    fn about_uses_defaults() {
        let engine = TemplateEngine::new();
        let about = AboutSection {
            content: Some("One\n\nTwo".to_string()),
            highlights: vec!["10 anos".to_string()],
            ..Default::default()
        };

        let html = build_about(&engine, Some(&about)).unwrap();

        assert!(html.as_str().contains(r#"<section id="sobre" class="section about">"#));
        assert!(html.as_str().contains("<h2>Sobre</h2>"));
        assert!(html.as_str().contains("<p>One</p><p>Two</p>"));
        assert!(html.as_str().contains(r#"<ul class="highlight-list"><li>10 anos</li></ul>"#));
    }

    #[test]
    fn services_render_cards_in_order() {
        let engine = TemplateEngine::new();
        let services = ServicesSection {
            title: Some("X".to_string()),
            items: vec![
                ServiceItem {
                    name: Some("A".to_string()),
                    description: Some("B".to_string()),
                    icon: None,
                },
                ServiceItem {
                    name: Some("C".to_string()),
                    icon: Some("★".to_string()),
                    ..Default::default()
                },
                ServiceItem::default(),
            ],
            ..Default::default()
        };

        let html = build_services(&engine, Some(&services)).unwrap();
        let html = html.as_str();

        assert_eq!(html.matches("<article class=\"service-card\">").count(), 3);
        assert_eq!(html.matches("service-icon").count(), 1);
        assert!(html.find("<h3>A</h3>").unwrap() < html.find("<h3>C</h3>").unwrap());
        assert!(html.contains("<p>B</p>"));
        assert!(html.contains("<h3></h3>"));
    }

    #[test]
    fn testimonials_render_quotes() {
        let engine = TemplateEngine::new();
        let testimonials = TestimonialsSection {
            title: None,
            items: vec![Testimonial {
                quote: Some("Great".to_string()),
                name: Some("Ana".to_string()),
                role: Some("CEO".to_string()),
            }],
        };

        let html = build_testimonials(&engine, Some(&testimonials)).unwrap();

        assert!(html.as_str().contains("<h2>Clientes satisfeitos</h2>"));
        assert!(html.as_str().contains("<p class=\"quote\">“Great”</p>"));
        assert!(html.as_str().contains("<p class=\"author\">Ana<span>CEO</span></p>"));
    }

    #[test]
    fn faq_items_are_closed_details() {
        let engine = TemplateEngine::new();
        let faq = FaqSection {
            title: None,
            items: vec![FaqItem {
                question: Some("Prazo?".to_string()),
                answer: Some("Sete dias.".to_string()),
            }],
        };

        let html = build_faq(&engine, Some(&faq)).unwrap();

        assert!(html.as_str().contains(r#"<details class="faq-item">"#));
        assert!(!html.as_str().contains("open"));
        assert!(html.as_str().contains("<summary>Prazo?</summary>"));
        assert!(html.as_str().contains(r#"<div class="faq-answer"><p>Sete dias.</p></div>"#));
    }

    #[test]
    fn cta_uses_defaults_and_accent_button() {
        let engine = TemplateEngine::new();
        let section = CtaSection {
            button: cta(Some("Falar"), Some("https://wa.me/1")),
            ..Default::default()
        };

        let html = build_cta(&engine, Some(&section)).unwrap();

        assert!(html.as_str().contains("<h2>Pronto para começar?</h2>"));
        assert!(html.as_str().contains("<p>Vamos conversar sobre seu projeto.</p>"));
        assert!(html.as_str().contains(r#"<a class="btn accent" href="https://wa.me/1""#));

        let without_link = CtaSection {
            button: cta(Some("Falar"), None),
            ..Default::default()
        };
        let html = build_cta(&engine, Some(&without_link)).unwrap();
        assert!(!html.as_str().contains("btn"));
    }

    #[test]
    fn contact_links_and_omissions() {
        let engine = TemplateEngine::new();
        let contact = ContactSection {
            phone: Some("+55 11 3333-4444".to_string()),
            whatsapp: Some("5511999990000".to_string()),
            email: Some("oi@acme.test".to_string()),
            maps_link: Some("https://maps.test/embed?q=1&z=2".to_string()),
            hours: vec!["Seg-Sex".to_string(), "".to_string()],
            social: vec![
                SocialLink {
                    platform: Some("Instagram".to_string()),
                    url: Some("https://instagram.test/acme".to_string()),
                },
                SocialLink {
                    platform: Some("Orphan".to_string()),
                    url: None,
                },
            ],
            ..Default::default()
        };

        let html = build_contact(&engine, Some(&contact)).unwrap();
        let html = html.as_str();

        assert!(html.contains(r#"<a href="tel:+55 11 3333-4444">+55 11 3333-4444</a>"#));
        assert!(html.contains(r#"<a href="https://wa.me/5511999990000" target="_blank" rel="noopener">WhatsApp</a>"#));
        assert!(html.contains(r#"<a href="mailto:oi@acme.test">oi@acme.test</a>"#));
        assert!(!html.contains("Endereço"));
        assert!(html.contains(r#"<iframe src="https://maps.test/embed?q=1&amp;z=2" loading="lazy""#));
        assert!(html.contains(r#"<div class="contact-hours"><ul><li>Seg-Sex</li></ul></div>"#));
        assert!(html.contains(">Instagram</a>"));
        assert!(!html.contains("Orphan"));
    }

    #[test]
    fn contact_without_details_has_no_links() {
        let engine = TemplateEngine::new();
        let contact = ContactSection {
            title: Some("Fale".to_string()),
            ..Default::default()
        };

        let html = build_contact(&engine, Some(&contact)).unwrap();

        assert!(html.as_str().contains(r#"id="contato""#));
        assert!(!html.as_str().contains("tel:"));
        assert!(!html.as_str().contains("wa.me"));
        assert!(!html.as_str().contains("mailto:"));
        assert!(!html.as_str().contains("<iframe"));
        assert!(!html.as_str().contains("contact-hours"));
        assert!(!html.as_str().contains("contact-social"));
    }

    #[test]
    fn footer_defaults_to_copyright() {
        let engine = TemplateEngine::new();

        let html = build_footer(&engine, None, &site("Acme")).unwrap();
        assert!(html.as_str().contains("© Acme. Todos os direitos reservados."));

        let html = build_footer(&engine, None, &SiteInfo::default()).unwrap();
        assert!(html.as_str().contains("© Sua Empresa."));
    }

    #[test]
    fn footer_links_need_label_and_url() {
        let engine = TemplateEngine::new();
        let footer = FooterSection {
            text: Some("Feito com carinho".to_string()),
            links: vec![
                FooterLink {
                    label: Some("Blog".to_string()),
                    url: Some("https://blog.test".to_string()),
                },
                FooterLink {
                    label: Some("Sem link".to_string()),
                    url: None,
                },
            ],
        };

        let html = build_footer(&engine, Some(&footer), &site("Acme")).unwrap();

        assert!(html.as_str().contains("Feito com carinho"));
        assert!(!html.as_str().contains("Todos os direitos"));
        assert!(html.as_str().contains(">Blog</a>"));
        assert!(!html.as_str().contains("Sem link"));
    }

    #[test]
    fn nav_shows_name_without_logo() {
        let engine = TemplateEngine::new();
        let entries = [SectionKind::Hero.nav_entry(), SectionKind::Faq.nav_entry()];

        let html = build_nav(&engine, &entries, "Acme & Co", None).unwrap();

        assert!(html.as_str().contains(r#"<span class="brand-name">Acme &amp; Co</span>"#));
        assert!(html.as_str().contains("<a href=\"#inicio\">Início</a>"));
        assert!(html.as_str().contains("<a href=\"#faq\">FAQ</a>"));

        let html = build_nav(&engine, &entries, "Acme", Some("assets/logo.svg")).unwrap();
        assert!(html.as_str().contains(r#"<img src="assets/logo.svg" alt="Acme" class="brand-logo">"#));
        assert!(!html.as_str().contains("brand-name"));
    }

    #[test]
    fn user_text_is_always_escaped() {
        let engine = TemplateEngine::new();
        let evil = r#"<script>alert("x" & 'y')</script>"#;

        let services = ServicesSection {
            title: Some(evil.to_string()),
            description: Some(evil.to_string()),
            items: vec![ServiceItem {
                name: Some(evil.to_string()),
                description: Some(evil.to_string()),
                icon: Some(evil.to_string()),
            }],
        };
        let contact = ContactSection {
            phone: Some(evil.to_string()),
            address: Some(evil.to_string()),
            maps_link: Some(evil.to_string()),
            ..Default::default()
        };
        let faq = FaqSection {
            title: Some(evil.to_string()),
            items: vec![FaqItem {
                question: Some(evil.to_string()),
                answer: Some(evil.to_string()),
            }],
        };

        for html in [
            build_services(&engine, Some(&services)).unwrap(),
            build_contact(&engine, Some(&contact)).unwrap(),
            build_faq(&engine, Some(&faq)).unwrap(),
            build_footer(
                &engine,
                Some(&FooterSection {
                    text: Some(evil.to_string()),
                    links: vec![],
                }),
                &site(evil),
            )
            .unwrap(),
        ] {
            assert!(!html.as_str().contains("<script"), "{html}");
            assert!(!html.as_str().contains(r#""x""#), "{html}");
            assert!(!html.as_str().contains("'y'"), "{html}");
            assert!(!html.as_str().contains(" & "), "{html}");
            assert!(html.as_str().contains("&lt;script&gt;"), "{html}");
        }
    }
}
