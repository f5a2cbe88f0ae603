//! Markup assembly primitives for formsmith
//!
//! `formsmith-html` is a standalone crate holding the low-level pieces the
//! form generator assembles its output from. It knows nothing about fields,
//! metadata or templates — only about encoded fragments, ordered attribute
//! bags and the handful of elements a form field is built out of.
//!
//! # Architecture
//!
//! - **Encoded by construction**: `Html` holds already-encoded markup; text
//!   enters through [`Html::text`] which escapes it
//! - **Ordered attributes**: `HtmlAttributes` preserves insertion order so
//!   rendered output is deterministic
//! - **Element builders**: `builders` produces the label/input/select/option
//!   shapes; callers never concatenate tag soup themselves

pub mod attrs;
pub mod builders;
pub mod fragment;

pub use attrs::HtmlAttributes;
pub use fragment::Html;
