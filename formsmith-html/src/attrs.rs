//! Ordered HTML attribute bags.
//!
//! Attributes render in insertion order so output is deterministic. The
//! `class` attribute is special-cased: adding a class merges it into the
//! existing space-separated list instead of replacing it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of HTML attribute names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlAttributes {
    map: IndexMap<String, String>,
}

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.map.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only if it is not already present.
    pub fn attr_if_absent(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.map.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    /// Merge one or more space-separated classes into the `class` attribute.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        let classes = classes.trim();
        if classes.is_empty() {
            return self;
        }
        match self.map.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                for class in classes.split_whitespace() {
                    if !existing.split_whitespace().any(|c| c == class) {
                        existing.push(' ');
                        existing.push_str(class);
                    }
                }
            }
            _ => {
                self.map.insert("class".into(), classes.to_string());
            }
        }
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the bag as ` name="value"` pairs, attribute values encoded.
    /// Empty bag renders as an empty string.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.map {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out
    }
}
