//! Model-driven HTML form field generation
//!
//! `formsmith` renders structured form fields — label, input and validation
//! message — from a typed data model. Sensible defaults come from model
//! metadata; callers override per field through a fluent configuration; a
//! pluggable template turns the resolved fragments into final markup.
//!
//! # Architecture
//!
//! - **Resolution before rendering**: metadata facts, explicit overrides and
//!   template rules merge into one finalized [`ResolvedConfig`] with strict
//!   precedence; nothing downstream mutates it
//! - **Strategy dispatch**: a closed [`DisplayStrategy`] set picked from the
//!   underlying type and cardinality emits the right markup shape — input,
//!   password, dropdown, radio group or checkbox group
//! - **Collaborators at trait seams**: metadata, validation state and the
//!   theme layer are traits; the core never assembles wrapper markup itself
//!
//! # Example
//!
//! ```
//! use formsmith::{DefinitionListTemplate, Form, MetadataAdapter, ValidationState,
//!     ValidationStateSource};
//! use formsmith_fields::{FieldConfig, FieldIdentity, FieldMetadata, FieldValue,
//!     UnderlyingKind};
//!
//! struct Bound;
//! impl MetadataAdapter for Bound {
//!     fn metadata(&self, _identity: &FieldIdentity) -> FieldMetadata {
//!         FieldMetadata::of(UnderlyingKind::Email).required()
//!     }
//! }
//! impl ValidationStateSource for Bound {
//!     fn validation_state(&self, _identity: &FieldIdentity) -> ValidationState {
//!         ValidationState::Unvalidated
//!     }
//! }
//!
//! let mut form = Form::new(&DefinitionListTemplate, &Bound, &Bound);
//! form.field("EmailAddress", FieldValue::Unset, FieldConfig::new())?;
//! assert!(form.html().contains("type=\"email\""));
//! # Ok::<(), formsmith::FormError>(())
//! ```

pub mod component;
pub mod error;
pub mod generator;
pub mod resolve;
pub mod strategy;
pub mod template;
pub mod traits;

pub use component::{FieldScope, Form};
pub use error::{FormError, Result};
pub use generator::FieldGenerator;
pub use resolve::ResolvedConfig;
pub use strategy::{DisplayStrategy, RenderContext};
pub use template::DefinitionListTemplate;
pub use traits::{
    FieldParent, FormTemplate, MetadataAdapter, ValidationState, ValidationStateSource,
};

pub use formsmith_fields as fields;
pub use formsmith_html as html;
