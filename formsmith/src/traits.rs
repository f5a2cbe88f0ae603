//! Collaborator boundaries: metadata, templates and validation state.
//!
//! The pipeline never talks to a model binder, a theme or a validator
//! directly — it consumes these traits. The host wires in real
//! implementations; tests wire in fakes.

use formsmith_fields::{FieldConfig, FieldIdentity, FieldMetadata};
use formsmith_html::Html;

use crate::error::Result;
use crate::resolve::ResolvedConfig;

/// Where a field sits when it is prepared — directly on the form, or nested
/// inside a section/container. Templates may adjust configuration
/// differently for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParent {
    Form,
    Section,
}

/// Validation outcome for a single bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Valid,
    Invalid,
    Unvalidated,
}

/// Read-only source of model metadata for a bound property.
///
/// Missing facts are simply absent — they contribute no default during
/// resolution and never error.
pub trait MetadataAdapter {
    fn metadata(&self, identity: &FieldIdentity) -> FieldMetadata;
}

/// Source of per-field validation state and messages.
pub trait ValidationStateSource {
    fn validation_state(&self, identity: &FieldIdentity) -> ValidationState;

    /// The message to show for an invalid field, if any.
    fn validation_message(&self, identity: &FieldIdentity) -> Option<String> {
        let _ = identity;
        None
    }
}

/// The theme layer: turns resolved label/field/validation fragments into the
/// final markup skeleton. The core never assembles wrapper markup itself.
pub trait FormTemplate {
    /// Render a complete self-closing field.
    fn field(
        &self,
        label: Html,
        field: Html,
        validation: Html,
        metadata: &FieldMetadata,
        config: &ResolvedConfig,
        is_valid: bool,
    ) -> Result<Html>;

    /// Render the opening wrapper of a container field.
    fn begin_field(
        &self,
        label: Html,
        field: Html,
        validation: Html,
        metadata: &FieldMetadata,
        config: &ResolvedConfig,
        is_valid: bool,
    ) -> Result<Html>;

    /// Render the closing wrapper of a container field.
    fn end_field(&self) -> Result<Html>;

    /// Last external customization point during resolution. Implementations
    /// must be idempotent: preparing an already-prepared config must leave
    /// it unchanged.
    fn prepare_field_config(&self, config: &mut FieldConfig, parent: FieldParent) {
        let _ = (config, parent);
    }
}
