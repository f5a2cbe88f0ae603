//! Field schema and configuration types
//!
//! `formsmith-fields` is a standalone, schema-only crate. It owns the types
//! that describe a form field — its identity, its model metadata and the
//! explicit configuration a caller layers on top — but none of the
//! resolution or rendering logic. The `formsmith` crate consumes these to
//! drive strategy routing and markup generation.
//!
//! # Architecture
//!
//! - **Schema-only**: configuration and metadata values, no rendering
//! - **Builder surface**: `FieldConfig` is a fluent mutable builder; the
//!   pipeline freezes it into a read-only form before rendering
//! - **Derived identity**: element ids, hint ids and fallback labels all
//!   derive from one validated property path

pub mod error;
pub mod identity;
pub mod types;

pub use error::{FieldsError, Result};
pub use identity::FieldIdentity;
pub use types::{
    ChoiceOption, DisplayType, FieldConfig, FieldMetadata, FieldValue, SelectItem, TextInputType,
    UnderlyingKind,
};
