//! The built-in definition-list template.
//!
//! Themes implement [`FormTemplate`] themselves; this minimal `<dt>`/`<dd>`
//! skeleton keeps the crate usable (and testable) without one.

use formsmith_fields::FieldMetadata;
use formsmith_html::{builders, Html, HtmlAttributes};

use crate::error::Result;
use crate::resolve::ResolvedConfig;
use crate::traits::FormTemplate;

/// Renders each field as a `<dt>` label and a `<dd>` holding the field
/// element, its hint (when configured) and its validation message.
pub struct DefinitionListTemplate;

impl DefinitionListTemplate {
    fn open(label: &Html, field: &Html, validation: &Html, config: &ResolvedConfig) -> Html {
        let mut html = Html::raw("<dt>");
        html.push(label);
        html.push_raw("</dt><dd>");
        html.push(field);
        // The hint carries the id that resolution wired into the field's
        // aria-describedby, so it must appear in the output.
        if let (Some(hint), Some(hint_id)) = (config.hint(), config.hint_id()) {
            let mut attrs = HtmlAttributes::new();
            attrs.attr("id", hint_id).add_class("hint");
            html.push_raw(" ");
            html.push(&builders::element("span", &Html::text(hint), &attrs));
        }
        html.push_raw(" ");
        html.push(validation);
        html
    }
}

impl FormTemplate for DefinitionListTemplate {
    fn field(
        &self,
        label: Html,
        field: Html,
        validation: Html,
        _metadata: &FieldMetadata,
        config: &ResolvedConfig,
        _is_valid: bool,
    ) -> Result<Html> {
        let mut html = Self::open(&label, &field, &validation, config);
        html.push_raw("</dd>");
        Ok(html)
    }

    fn begin_field(
        &self,
        label: Html,
        field: Html,
        validation: Html,
        _metadata: &FieldMetadata,
        config: &ResolvedConfig,
        _is_valid: bool,
    ) -> Result<Html> {
        Ok(Self::open(&label, &field, &validation, config))
    }

    fn end_field(&self) -> Result<Html> {
        Ok(Html::raw("</dd>"))
    }
}
