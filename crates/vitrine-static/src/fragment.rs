//! Rendered HTML fragments.

use std::fmt;

use crate::text::escape;

/// A piece of HTML that is safe to embed as-is.
///
/// Fragments only come from templates with autoescaping, from the text
/// helpers, or from [`Fragment::text`], so user text can never reach the page
/// unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// An empty fragment, used for omitted sections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Escape plain text into a fragment.
    pub fn text(text: &str) -> Self {
        Self(escape(text).into_owned())
    }

    /// Wrap markup built inside this crate.
    pub(crate) fn trusted(html: String) -> Self {
        Self(html)
    }

    /// Whether the fragment renders nothing visible.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Fragment> for minijinja::Value {
    fn from(fragment: Fragment) -> Self {
        minijinja::Value::from_safe_string(fragment.0)
    }
}
