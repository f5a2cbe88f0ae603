//! Core configuration and metadata types for field generation.
//!
//! `FieldMetadata` is what the model-binding layer knows about a property;
//! `FieldConfig` is what the caller explicitly asked for. The resolution
//! pipeline in the `formsmith` crate merges the two, so nothing here applies
//! precedence rules — these are plain value holders.

use std::fmt;

use serde::{Deserialize, Serialize};

use formsmith_html::{Html, HtmlAttributes};

/// How a field is displayed, when the caller overrides the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayType {
    /// Let the underlying type decide.
    #[default]
    Default,
    /// A list of radio buttons (single-valued) or checkboxes (multi-valued).
    List,
    /// A `<select>` dropdown.
    DropDown,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Default => "default",
            DisplayType::List => "list",
            DisplayType::DropDown => "drop-down",
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The HTML `type` attribute a text-style input renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextInputType {
    Text,
    Password,
    Number,
    Date,
    Email,
    Url,
}

impl TextInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Password => "password",
            TextInputType::Number => "number",
            TextInputType::Date => "date",
            TextInputType::Email => "email",
            TextInputType::Url => "url",
        }
    }
}

/// The field's value type after stripping nullability and collection
/// wrapping — this is what picks the rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnderlyingKind {
    Boolean,
    /// A bounded choice set — enum-like, options supplied via metadata or at
    /// render time.
    Choice,
    Password,
    Text,
    Number,
    Date,
    Email,
    Url,
}

impl UnderlyingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnderlyingKind::Boolean => "boolean",
            UnderlyingKind::Choice => "choice",
            UnderlyingKind::Password => "password",
            UnderlyingKind::Text => "text",
            UnderlyingKind::Number => "number",
            UnderlyingKind::Date => "date",
            UnderlyingKind::Email => "email",
            UnderlyingKind::Url => "url",
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, UnderlyingKind::Choice)
    }
}

impl fmt::Display for UnderlyingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for UnderlyingKind {
    fn default() -> Self {
        UnderlyingKind::Text
    }
}

/// A candidate choice supplied by metadata (or at render time) for a
/// bounded-choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    pub fn labelled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }

    /// Display text: the label when present, the value otherwise.
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// A fully-resolved choice item, selection state decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// The current runtime value of a bound property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldValue {
    /// No value bound (unset optional, fresh form).
    #[default]
    Unset,
    Bool(bool),
    Scalar(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Unset, or an empty scalar. Drives "none" sentinel selection.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Unset => true,
            FieldValue::Scalar(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The shape name, for type-mismatch diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Unset => "unset",
            FieldValue::Bool(_) => "a boolean",
            FieldValue::Scalar(_) => "a single value",
            FieldValue::Many(_) => "a collection",
        }
    }
}

/// What the model-binding layer knows about a property. Read-only; absent
/// facts simply contribute no default during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub is_required: bool,
    pub is_read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_format_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_display_text: Option<String>,
    pub is_multi_valued: bool,
    pub underlying: UnderlyingKind,
    /// Candidate choices for `Choice` fields; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
}

impl FieldMetadata {
    /// Metadata for a property of the given underlying kind, all facts absent.
    pub fn of(underlying: UnderlyingKind) -> Self {
        Self {
            underlying,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    pub fn multi_valued(mut self) -> Self {
        self.is_multi_valued = true;
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_edit_format(mut self, format: impl Into<String>) -> Self {
        self.edit_format_string = Some(format.into());
        self
    }

    pub fn with_null_display_text(mut self, text: impl Into<String>) -> Self {
        self.null_display_text = Some(text.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }
}

/// Explicit per-field configuration — everything a caller may override.
///
/// This is the mutable builder half of the pipeline. Resolution merges
/// metadata defaults into unset slots and freezes the result; nothing
/// downstream of resolution mutates a config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    pub has_label_element: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_classes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_string: Option<String>,
    pub display_type: DisplayType,
    pub attributes: HtmlAttributes,
    pub readonly: bool,
    /// Inline markup that replaces the generated field element entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_html: Option<Html>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            label_text: None,
            has_label_element: true,
            label_classes: None,
            hint: None,
            hint_id: None,
            format_string: None,
            none_string: None,
            display_type: DisplayType::Default,
            attributes: HtmlAttributes::new(),
            readonly: false,
            field_html: None,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label text.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label_text = Some(text.into());
        self
    }

    /// Emit the label text bare, without a `<label>` element.
    pub fn without_label_element(mut self) -> Self {
        self.has_label_element = false;
        self
    }

    /// Add classes to the label element.
    pub fn add_label_class(mut self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        match &mut self.label_classes {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(&classes);
            }
            None => self.label_classes = Some(classes),
        }
        self
    }

    /// Attach a hint to the field.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Format the current value with the given format string (`{0}` is
    /// replaced with the raw value).
    pub fn with_format_string(mut self, format: impl Into<String>) -> Self {
        self.format_string = Some(format.into());
        self
    }

    /// Text for the sentinel "no selection" option.
    pub fn with_none_as(mut self, text: impl Into<String>) -> Self {
        self.none_string = Some(text.into());
        self
    }

    /// Render a choice field as a dropdown.
    pub fn as_drop_down(mut self) -> Self {
        self.display_type = DisplayType::DropDown;
        self
    }

    /// Render a choice field as a radio/checkbox list.
    pub fn as_list(mut self) -> Self {
        self.display_type = DisplayType::List;
        self
    }

    /// Mark the field readonly (flag plus `readonly` attribute).
    pub fn as_readonly(mut self) -> Self {
        self.readonly = true;
        self.attributes.attr("readonly", "readonly");
        self
    }

    /// Add a `disabled` attribute.
    pub fn disabled(mut self) -> Self {
        self.attributes.attr("disabled", "disabled");
        self
    }

    /// Add a `required` attribute.
    pub fn required(mut self) -> Self {
        self.attributes.attr("required", "required");
        self
    }

    /// Add a `placeholder` attribute.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.attributes.attr("placeholder", text.into());
        self
    }

    /// Set an arbitrary attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.attr(name, value);
        self
    }

    /// Merge classes into the field element's `class` attribute.
    pub fn add_class(mut self, classes: &str) -> Self {
        self.attributes.add_class(classes);
        self
    }

    /// Replace the generated field element with inline markup.
    pub fn with_field_html(mut self, html: Html) -> Self {
        self.field_html = Some(html);
        self
    }

    /// Whether the rendered element is readonly or disabled.
    pub fn is_readonly_or_disabled(&self) -> bool {
        self.readonly || self.attributes.has("readonly") || self.attributes.has("disabled")
    }
}
