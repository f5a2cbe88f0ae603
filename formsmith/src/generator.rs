//! The field generator façade — label, field and validation fragments for
//! one bound property.
//!
//! A generator is bound at construction to one identity, the metadata for
//! that identity and a snapshot of the current value. The three `*_html`
//! operations all work from a finalized configuration, so the same resolved
//! decision drives every fragment of a field.

use formsmith_fields::{ChoiceOption, FieldConfig, FieldIdentity, FieldMetadata, FieldValue};
use formsmith_html::{builders, Html, HtmlAttributes};

use crate::error::Result;
use crate::resolve::{self, ResolvedConfig};
use crate::strategy::{DisplayStrategy, RenderContext};
use crate::traits::{FieldParent, FormTemplate, ValidationState, ValidationStateSource};

/// Class on the validation message element for an invalid field.
pub const VALIDATION_MESSAGE_INVALID_CLASS: &str = "field-validation-error";
/// Class on the validation message element otherwise.
pub const VALIDATION_MESSAGE_VALID_CLASS: &str = "field-validation-valid";

/// Generates the markup fragments for a single bound property.
pub struct FieldGenerator<'a> {
    identity: FieldIdentity,
    metadata: FieldMetadata,
    value: FieldValue,
    template: &'a dyn FormTemplate,
    validation: &'a dyn ValidationStateSource,
}

impl<'a> FieldGenerator<'a> {
    pub fn new(
        identity: FieldIdentity,
        metadata: FieldMetadata,
        value: FieldValue,
        template: &'a dyn FormTemplate,
        validation: &'a dyn ValidationStateSource,
    ) -> Self {
        Self {
            identity,
            metadata,
            value,
            template,
            validation,
        }
    }

    pub fn identity(&self) -> &FieldIdentity {
        &self.identity
    }

    pub fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The display name: metadata display name, else a humanized fallback
    /// from the identity's last path segment.
    pub fn display_name(&self) -> String {
        self.metadata
            .display_name
            .clone()
            .unwrap_or_else(|| self.identity.humanized_label())
    }

    /// Current validation state for this field.
    pub fn validation_state(&self) -> ValidationState {
        self.validation.validation_state(&self.identity)
    }

    /// Merge metadata into the configuration and finalize it. Preparing the
    /// output of a previous `prepare` call is a no-op.
    pub fn prepare(
        &self,
        config: Option<FieldConfig>,
        parent: FieldParent,
    ) -> Result<ResolvedConfig> {
        resolve::prepare(config, &self.identity, &self.metadata, self.template, parent)
    }

    /// The label fragment. Label text priority: explicit override, metadata
    /// display name, humanized path segment. An `id` attribute override on
    /// the field changes the label's `for` target to match.
    pub fn label_html(&self, config: &ResolvedConfig) -> Html {
        let target_id = config
            .attributes()
            .get("id")
            .map(str::to_string)
            .unwrap_or_else(|| self.identity.id());

        let text = config
            .label_text()
            .map(str::to_string)
            .unwrap_or_else(|| self.display_name());
        let content = Html::text(&text);

        if !config.has_label_element() {
            return content;
        }

        let mut attrs = HtmlAttributes::new();
        if let Some(classes) = config.label_classes() {
            attrs.add_class(classes);
        }
        builders::label(&target_id, &content, &attrs)
    }

    /// The field element fragment. An inline `field_html` override wins
    /// outright; otherwise the routed strategy renders.
    pub fn field_html(
        &self,
        config: &ResolvedConfig,
        items: Option<&[ChoiceOption]>,
    ) -> Result<Html> {
        self.field_html_with(config, items, self.validation_state())
    }

    /// As `field_html`, with the validation snapshot supplied by the caller
    /// so a whole field render works from one read.
    pub(crate) fn field_html_with(
        &self,
        config: &ResolvedConfig,
        items: Option<&[ChoiceOption]>,
        validation: ValidationState,
    ) -> Result<Html> {
        if let Some(html) = config.field_html() {
            return Ok(html.clone());
        }

        let strategy = DisplayStrategy::route(&self.metadata, config.display_type())?;
        strategy.render(&RenderContext {
            identity: &self.identity,
            metadata: &self.metadata,
            config,
            value: &self.value,
            items,
            validation,
        })
    }

    /// The validation message fragment for this field.
    pub fn validation_html(&self, _config: &ResolvedConfig) -> Html {
        self.validation_html_with(self.validation_state())
    }

    pub(crate) fn validation_html_with(&self, validation: ValidationState) -> Html {
        let mut attrs = HtmlAttributes::new();
        attrs.add_class(match validation {
            ValidationState::Invalid => VALIDATION_MESSAGE_INVALID_CLASS,
            _ => VALIDATION_MESSAGE_VALID_CLASS,
        });
        attrs.attr("data-valmsg-for", self.identity.name());

        let message = self
            .validation
            .validation_message(&self.identity)
            .unwrap_or_default();
        builders::element("span", &Html::text(&message), &attrs)
    }
}
