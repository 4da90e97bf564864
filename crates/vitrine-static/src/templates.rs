//! Template engine for rendering page sections.
//!
//! All templates end in `.html`, so every `{{ value }}` is escaped with
//! [`crate::text::escape`]. Markup produced by the text helpers enters
//! templates through the `paragraphs` and `bullet_list` filters, or through
//! `| safe` for already rendered fragments.

use std::fmt::Write as _;

use minijinja::value::Value;
use minijinja::{AutoEscape, Environment, Error, ErrorKind, Output, State};
use serde::Serialize;

use crate::text;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the landing page templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_formatter(escape_formatter);

        env.add_filter("paragraphs", paragraphs_filter);
        env.add_filter("bullet_list", bullet_list_filter);

        for (name, source) in TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a named template with the given context.
    pub fn render<S: Serialize>(&self, template: &str, context: S) -> Result<String, Error> {
        self.env.get_template(template)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes values escaped with [`text::escape`]; `none` renders as nothing.
fn escape_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if value.is_safe() || !matches!(state.auto_escape(), AutoEscape::Html) {
        return minijinja::escape_formatter(out, state, value);
    }

    if value.is_undefined() || value.is_none() {
        return Ok(());
    }

    let written = match value.as_str() {
        Some(s) => out.write_str(&text::escape(s)),
        None => out.write_str(&text::escape(&value.to_string())),
    };

    written.map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output"))
}

fn paragraphs_filter(value: String) -> Value {
    Value::from(text::paragraphs(&value))
}

fn bullet_list_filter(items: Vec<String>, class: Option<String>) -> Value {
    Value::from(text::list(&items, class.as_deref().unwrap_or("")))
}

const TEMPLATES: [(&str, &str); 12] = [
    ("page.html", PAGE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("button.html", BUTTON_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("services.html", SERVICES_TEMPLATE),
    ("testimonials.html", TESTIMONIALS_TEMPLATE),
    ("faq.html", FAQ_TEMPLATE),
    ("cta.html", CTA_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("section_header.html", SECTION_HEADER_TEMPLATE),
];

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description }}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&amp;display=swap" rel="stylesheet">
    <link rel="stylesheet" href="{{ stylesheet }}">
    <style>
        :root {
            --color-primary: {{ theme.primary }};
            --color-secondary: {{ theme.secondary }};
            --color-accent: {{ theme.accent }};
            --color-background: {{ theme.background }};
            --color-text: {{ theme.text }};
        }
    </style>
</head>
<body>
{{ nav | safe }}
    <main>
{% for section in sections %}
{{ section | safe }}
{% endfor %}
    </main>
{{ footer | safe }}
</body>
</html>
"##;

const NAV_TEMPLATE: &str = r##"    <nav class="top-nav">
        <div class="brand">
{% if logo %}
            <img src="{{ logo }}" alt="{{ site_name }}" class="brand-logo">
{% else %}
            <span class="brand-name">{{ site_name }}</span>
{% endif %}
        </div>
        <div class="nav-links">
{% for entry in entries %}
            <a href="#{{ entry.id }}">{{ entry.label }}</a>
{% endfor %}
        </div>
    </nav>"##;

const BUTTON_TEMPLATE: &str = r##"<a class="btn {{ button.variant }}" href="{{ button.link }}" target="_blank" rel="noopener">{{ button.text }}</a>"##;

const SECTION_HEADER_TEMPLATE: &str = r##"        <div class="section-header">
            <span class="eyebrow">{{ eyebrow }}</span>
            <h2>{{ title }}</h2>
{% if description is defined %}
            <p>{{ description }}</p>
{% endif %}
        </div>"##;

const HERO_TEMPLATE: &str = r##"    <header class="hero" id="{{ id }}">
        <div class="hero-content">
{% if logo %}
            <img src="{{ logo }}" alt="{{ site_name }}" class="hero-logo">
{% endif %}
            <h1>{{ headline }}</h1>
            <p class="subheadline">{{ subheadline }}</p>
            <div class="hero-actions">{% for button in buttons %}{% include "button.html" %}{% endfor %}</div>
            {{ bullet_points | bullet_list("hero-bullets") }}
        </div>
    </header>"##;

const ABOUT_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section about">
{% include "section_header.html" %}
        <div class="section-body">
            {{ content | paragraphs }}
            {{ highlights | bullet_list("highlight-list") }}
        </div>
    </section>"##;

const SERVICES_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section services">
{% include "section_header.html" %}
        <div class="service-grid">
{% for item in items %}
            <article class="service-card">
{% if item.icon %}
                <div class="service-icon">{{ item.icon }}</div>
{% endif %}
                <h3>{{ item.name }}</h3>
                <p>{{ item.description }}</p>
            </article>
{% endfor %}
        </div>
    </section>"##;

const TESTIMONIALS_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section testimonials">
{% include "section_header.html" %}
        <div class="testimonial-grid">
{% for item in items %}
            <article class="testimonial">
                <p class="quote">“{{ item.quote }}”</p>
                <p class="author">{{ item.name }}<span>{{ item.role }}</span></p>
            </article>
{% endfor %}
        </div>
    </section>"##;

const FAQ_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section faq">
{% include "section_header.html" %}
        <div class="faq-list">
{% for item in items %}
            <details class="faq-item">
                <summary>{{ item.question }}</summary>
                <div class="faq-answer">{{ item.answer | paragraphs }}</div>
            </details>
{% endfor %}
        </div>
    </section>"##;

const CTA_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section cta">
        <div class="cta-box">
            <h2>{{ headline }}</h2>
            <p>{{ subheadline }}</p>
{% if button %}
            {% include "button.html" %}
{% endif %}
        </div>
    </section>"##;

const CONTACT_TEMPLATE: &str = r##"    <section id="{{ id }}" class="section contact">
{% include "section_header.html" %}
        <div class="contact-grid">
            <div class="contact-card">
                <ul class="contact-list">
{% if phone %}
                    <li><strong>Telefone:</strong> <a href="tel:{{ phone }}">{{ phone }}</a></li>
{% endif %}
{% if whatsapp %}
                    <li><strong>WhatsApp:</strong> <a href="https://wa.me/{{ whatsapp }}" target="_blank" rel="noopener">WhatsApp</a></li>
{% endif %}
{% if email %}
                    <li><strong>E-mail:</strong> <a href="mailto:{{ email }}">{{ email }}</a></li>
{% endif %}
{% if address %}
                    <li><strong>Endereço:</strong> {{ address }}</li>
{% endif %}
                </ul>
{% if hours %}
                <div class="contact-hours">{{ hours | bullet_list }}</div>
{% endif %}
{% if social %}
                <div class="contact-social">
{% for link in social %}
                    <a href="{{ link.url }}" target="_blank" rel="noopener">{{ link.label }}</a>
{% endfor %}
                </div>
{% endif %}
            </div>
            <div class="contact-map">
{% if maps_link %}
                <iframe src="{{ maps_link }}" loading="lazy" allowfullscreen referrerpolicy="no-referrer-when-downgrade"></iframe>
{% endif %}
            </div>
        </div>
    </section>"##;

const FOOTER_TEMPLATE: &str = r##"    <footer class="site-footer">
        <div class="footer-text">{{ text }}</div>
        <div class="footer-links">
{% for link in links %}
            <a href="{{ link.url }}" target="_blank" rel="noopener">{{ link.label }}</a>
{% endfor %}
        </div>
    </footer>"##;
