//! Field identity — the bound property path and everything derived from it.
//!
//! A `FieldIdentity` wraps the dotted path of the model property a field is
//! bound to (`Customer.EmailAddress`). Element ids, hint ids, per-item ids
//! and the humanized fallback label all derive from it, so the same identity
//! yields the same ids across label, input and validation rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldsError, Result};

/// The validated dotted property path a field is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldIdentity {
    path: String,
}

impl FieldIdentity {
    /// Validate and wrap a property path.
    ///
    /// An empty path is a `MissingIdentity` error; a path with an empty
    /// segment (`a..b`, `.a`, `a.`) is an `InvalidPath` error.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(FieldsError::MissingIdentity);
        }
        if path.split('.').any(|segment| segment.is_empty()) {
            return Err(FieldsError::InvalidPath { path });
        }
        Ok(Self { path })
    }

    /// The full dotted path, used as the element `name`.
    pub fn name(&self) -> &str {
        &self.path
    }

    /// The element id: the path with dots replaced by underscores.
    pub fn id(&self) -> String {
        self.path.replace('.', "_")
    }

    /// The id of the field's hint element.
    pub fn hint_id(&self) -> String {
        format!("{}--Hint", self.id())
    }

    /// The id of the `index`-th item in a radio or checkbox list (1-based).
    pub fn item_id(&self, index: usize) -> String {
        format!("{}_{}", self.id(), index)
    }

    /// The last segment of the path.
    pub fn last_segment(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    /// A human-readable label derived from the last path segment:
    /// `emailAddress` / `email_address` / `EmailAddress` all become
    /// `Email address`.
    pub fn humanized_label(&self) -> String {
        humanize(self.last_segment())
    }
}

impl fmt::Display for FieldIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Split a camelCase / snake_case segment into sentence-cased words.
fn humanize(segment: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for chunk in segment.split('_') {
        let mut current = String::new();
        for ch in chunk.chars() {
            if ch.is_uppercase() && !current.is_empty() {
                words.push(current);
                current = String::new();
            }
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for (j, ch) in word.chars().enumerate() {
            if i == 0 && j == 0 {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        }
    }
    out
}
