//! Encoded HTML fragments.
//!
//! An [`Html`] value holds markup that is already safe to write to a page.
//! Plain text enters through [`Html::text`], which entity-encodes it; markup
//! produced by the element builders enters through [`Html::raw`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// An HTML fragment that is already encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// An empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap markup that is already encoded. The caller vouches for it.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Encode plain text into a fragment.
    pub fn text(text: &str) -> Self {
        Self(html_escape::encode_text(text).into_owned())
    }

    /// The encoded markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Html) {
        self.0.push_str(&other.0);
    }

    /// Append already-encoded markup.
    pub fn push_raw(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    /// Consume the fragment, returning the encoded markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_encoded() {
        let html = Html::text("a < b & \"c\"");
        assert_eq!(html.as_str(), "a &lt; b &amp; \"c\"");
    }

    #[test]
    fn raw_is_passed_through() {
        let html = Html::raw("<em>hi</em>");
        assert_eq!(html.as_str(), "<em>hi</em>");
    }

    #[test]
    fn push_concatenates() {
        let mut html = Html::raw("<dt>");
        html.push(&Html::text("Name"));
        html.push_raw("</dt>");
        assert_eq!(html.as_str(), "<dt>Name</dt>");
    }

    #[test]
    fn empty_fragment() {
        assert!(Html::empty().is_empty());
        assert_eq!(Html::empty().to_string(), "");
    }
}
