//! Text helpers: slugs, escaping, paragraphs and bullet lists.

use std::borrow::Cow;

use crate::fragment::Fragment;

/// Escape HTML special characters in user-supplied text.
///
/// Handles `&`, `<`, `>`, `"` and `'`, so the result is safe both as element
/// content and inside a quoted attribute. Borrows when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Convert text to a filesystem and URL safe slug.
///
/// Non-ASCII letters are transliterated first ("Café" becomes "cafe"), then
/// every run of other characters collapses to a single hyphen. Returns
/// `default` when nothing usable is left.
pub fn slugify(value: &str, default: &str) -> String {
    let ascii = deunicode::deunicode(value);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        default.to_string()
    } else {
        slug
    }
}

/// Render free text as paragraphs.
///
/// Blank lines separate paragraphs, single newlines become `<br>`.
pub fn paragraphs(text: &str) -> Fragment {
    let normalized = text.replace("\r\n", "\n");

    let html: String = normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", escape(block).replace('\n', "<br>")))
        .collect();

    Fragment::trusted(html)
}

/// Render a bullet list, skipping blank items.
///
/// Returns an empty fragment when no item has visible text.
pub fn list<I, S>(items: I, class: &str) -> Fragment
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: String = items
        .into_iter()
        .filter(|item| !item.as_ref().trim().is_empty())
        .map(|item| format!("<li>{}</li>", escape(item.as_ref())))
        .collect();

    if entries.is_empty() {
        return Fragment::empty();
    }

    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape(class))
    };

    Fragment::trusted(format!("<ul{}>{}</ul>", class_attr, entries))
}

/// Treat empty strings the same as missing values.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
