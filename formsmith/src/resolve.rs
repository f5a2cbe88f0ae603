//! Configuration resolution — merging metadata facts into caller overrides.
//!
//! Resolution is strictly ordered: the caller's explicit configuration wins,
//! metadata fills slots that are still unset, the routed display strategy
//! and then the template get one adjustment pass each, and finally the
//! automatic `required` rule runs. The output is a [`ResolvedConfig`],
//! which nothing downstream mutates.

use tracing::debug;

use formsmith_fields::{DisplayType, FieldConfig, FieldIdentity, FieldMetadata};
use formsmith_html::{Html, HtmlAttributes};

use crate::error::Result;
use crate::strategy::DisplayStrategy;
use crate::traits::{FieldParent, FormTemplate};

/// A finalized field configuration. Read-only by construction: accessors
/// only, no mutation surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    inner: FieldConfig,
}

impl ResolvedConfig {
    pub fn label_text(&self) -> Option<&str> {
        self.inner.label_text.as_deref()
    }

    pub fn has_label_element(&self) -> bool {
        self.inner.has_label_element
    }

    pub fn label_classes(&self) -> Option<&str> {
        self.inner.label_classes.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.inner.hint.as_deref()
    }

    pub fn hint_id(&self) -> Option<&str> {
        self.inner.hint_id.as_deref()
    }

    pub fn format_string(&self) -> Option<&str> {
        self.inner.format_string.as_deref()
    }

    pub fn none_string(&self) -> Option<&str> {
        self.inner.none_string.as_deref()
    }

    pub fn display_type(&self) -> DisplayType {
        self.inner.display_type
    }

    pub fn attributes(&self) -> &HtmlAttributes {
        &self.inner.attributes
    }

    pub fn readonly(&self) -> bool {
        self.inner.readonly
    }

    pub fn is_readonly_or_disabled(&self) -> bool {
        self.inner.is_readonly_or_disabled()
    }

    pub fn field_html(&self) -> Option<&Html> {
        self.inner.field_html.as_ref()
    }

    /// Clone the underlying configuration back out (resolution is
    /// idempotent, so re-preparing the clone yields an equal result).
    pub fn to_config(&self) -> FieldConfig {
        self.inner.clone()
    }
}

/// Merge metadata into the caller's configuration and freeze the result.
///
/// Precedence, first writer wins — later steps only fill still-unset slots,
/// with the one exception of metadata read-only-ness, which always forces
/// the readonly flag on:
///
/// 1. caller config (or defaults when `None`)
/// 2. `format_string` from metadata's edit format
/// 3. `none_string` from metadata's null-display text
/// 4. readonly forced on when metadata says so
/// 5. hint id + `aria-describedby` when a hint was requested
/// 6. routed display strategy adjustment
/// 7. template adjustment
/// 8. automatic `required` (skipped for readonly/disabled fields, fields
///    with an explicit `required`, and multi-valued checkbox lists)
pub fn prepare(
    config: Option<FieldConfig>,
    identity: &FieldIdentity,
    metadata: &FieldMetadata,
    template: &dyn FormTemplate,
    parent: FieldParent,
) -> Result<ResolvedConfig> {
    let mut config = config.unwrap_or_default();

    if config.format_string.is_none() {
        config.format_string = metadata.edit_format_string.clone();
    }
    if config.none_string.is_none() {
        config.none_string = metadata.null_display_text.clone();
    }
    if metadata.is_read_only {
        config.readonly = true;
        config.attributes.attr("readonly", "readonly");
    }
    if config.hint.is_some() {
        let hint_id = identity.hint_id();
        config.attributes.attr("aria-describedby", &hint_id);
        config.hint_id = Some(hint_id);
    }

    let strategy = DisplayStrategy::route(metadata, config.display_type)?;
    strategy.adjust(&mut config, metadata);
    template.prepare_field_config(&mut config, parent);

    // Run after the adjustments above since they may change the display type.
    let readonly_or_disabled = config.is_readonly_or_disabled();
    let is_checkbox_list = config.display_type == DisplayType::List && metadata.is_multi_valued;
    let explicitly_required = config.attributes.has("required");
    if metadata.is_required && !readonly_or_disabled && !explicitly_required && !is_checkbox_list {
        config.attributes.attr("required", "required");
    }

    debug!(
        field = %identity,
        strategy = %strategy.name(),
        display = %config.display_type,
        "resolved field configuration"
    );

    Ok(ResolvedConfig { inner: config })
}
