//! Display strategies and the router that picks one.
//!
//! A strategy is picked from the underlying type, the cardinality and any
//! explicit display override — a closed set with an explicit router, so the
//! mapping is total. Each variant knows how to adjust a configuration
//! during resolution and how to render the field element itself.

use tracing::debug;

use formsmith_fields::{
    ChoiceOption, DisplayType, FieldConfig, FieldIdentity, FieldMetadata, FieldValue, SelectItem,
    TextInputType, UnderlyingKind,
};
use formsmith_html::{builders, Html, HtmlAttributes};

use crate::error::{FormError, Result};
use crate::resolve::ResolvedConfig;
use crate::traits::ValidationState;

/// Class added to each checkbox in an invalid checkbox list.
pub const VALIDATION_INPUT_CLASS: &str = "input-validation-error";

/// Everything a strategy needs to render one field element.
pub struct RenderContext<'a> {
    pub identity: &'a FieldIdentity,
    pub metadata: &'a FieldMetadata,
    pub config: &'a ResolvedConfig,
    pub value: &'a FieldValue,
    /// Candidate choices supplied at render time; metadata options are used
    /// when absent.
    pub items: Option<&'a [ChoiceOption]>,
    pub validation: ValidationState,
}

impl<'a> RenderContext<'a> {
    fn candidates(&self) -> &'a [ChoiceOption] {
        self.items.unwrap_or(&self.metadata.options)
    }
}

/// The closed set of rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStrategy {
    /// One text-style `<input>` with the given `type`.
    TextInput(TextInputType),
    /// A password input; never echoes the current value.
    Password,
    /// A single checkbox with a hidden `false` sibling.
    SingleCheckbox,
    /// A bounded choice set: dropdown, radio list or checkbox list.
    ChoiceList,
}

impl DisplayStrategy {
    /// Pick the strategy for a field. Explicit display overrides are
    /// honored first; they conflict with underlying types that have no
    /// choice set. The mapping is total over [`UnderlyingKind`].
    pub fn route(metadata: &FieldMetadata, display_type: DisplayType) -> Result<Self> {
        let strategy = match display_type {
            DisplayType::List | DisplayType::DropDown => {
                if !metadata.underlying.is_choice() {
                    return Err(FormError::ConfigurationConflict {
                        display_type: display_type.to_string(),
                        underlying: metadata.underlying.to_string(),
                    });
                }
                DisplayStrategy::ChoiceList
            }
            DisplayType::Default => match metadata.underlying {
                UnderlyingKind::Boolean => DisplayStrategy::SingleCheckbox,
                UnderlyingKind::Choice => DisplayStrategy::ChoiceList,
                UnderlyingKind::Password => DisplayStrategy::Password,
                UnderlyingKind::Text => DisplayStrategy::TextInput(TextInputType::Text),
                UnderlyingKind::Number => DisplayStrategy::TextInput(TextInputType::Number),
                UnderlyingKind::Date => DisplayStrategy::TextInput(TextInputType::Date),
                UnderlyingKind::Email => DisplayStrategy::TextInput(TextInputType::Email),
                UnderlyingKind::Url => DisplayStrategy::TextInput(TextInputType::Url),
            },
        };
        debug!(underlying = %metadata.underlying, strategy = %strategy.name(), "routed display strategy");
        Ok(strategy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayStrategy::TextInput(_) => "text-input",
            DisplayStrategy::Password => "password",
            DisplayStrategy::SingleCheckbox => "single-checkbox",
            DisplayStrategy::ChoiceList => "choice-list",
        }
    }

    /// Strategy-specific configuration adjustment (resolution step 6).
    pub fn adjust(&self, config: &mut FieldConfig, metadata: &FieldMetadata) {
        if let DisplayStrategy::ChoiceList = self {
            if config.display_type == DisplayType::Default {
                config.display_type = DisplayType::DropDown;
            }
            if metadata.is_multi_valued && config.display_type == DisplayType::DropDown {
                config.attributes.attr("multiple", "multiple");
            }
        }
    }

    /// Render the field element for the finalized configuration.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<Html> {
        match self {
            DisplayStrategy::TextInput(input_type) => render_text_input(ctx, *input_type),
            DisplayStrategy::Password => render_password(ctx),
            DisplayStrategy::SingleCheckbox => render_single_checkbox(ctx),
            DisplayStrategy::ChoiceList => render_choice_list(ctx),
        }
    }

    /// Whether a candidate item counts as selected for the current value:
    /// membership for multi-valued fields, equality for single-valued ones.
    pub fn is_selected(&self, item_value: &str, ctx: &RenderContext<'_>) -> Result<bool> {
        if ctx.metadata.is_multi_valued {
            match ctx.value {
                FieldValue::Many(values) => Ok(values.iter().any(|v| v == item_value)),
                FieldValue::Unset => Ok(false),
                other => Err(mismatch(ctx, "a collection", other)),
            }
        } else {
            match ctx.value {
                FieldValue::Scalar(value) => Ok(value == item_value),
                FieldValue::Unset => Ok(false),
                other => Err(mismatch(ctx, "a single value", other)),
            }
        }
    }
}

fn mismatch(ctx: &RenderContext<'_>, expected: &str, actual: &FieldValue) -> FormError {
    FormError::TypeMismatch {
        field: ctx.identity.name().to_string(),
        expected: expected.to_string(),
        actual: actual.shape().to_string(),
    }
}

fn scalar_value<'a>(ctx: &'a RenderContext<'_>) -> Result<&'a str> {
    match ctx.value {
        FieldValue::Unset => Ok(""),
        FieldValue::Scalar(value) => Ok(value),
        other => Err(mismatch(ctx, "a single value", other)),
    }
}

/// Apply an edit format string: `{0}` is replaced with the raw value. A
/// format with no placeholder leaves the value untouched.
fn apply_format(format: Option<&str>, value: &str) -> String {
    match format {
        Some(format) if format.contains("{0}") => format.replace("{0}", value),
        _ => value.to_string(),
    }
}

fn render_text_input(ctx: &RenderContext<'_>, input_type: TextInputType) -> Result<Html> {
    let raw = scalar_value(ctx)?;
    let shown = apply_format(ctx.config.format_string(), raw);
    Ok(builders::input(
        input_type.as_str(),
        ctx.identity.name(),
        &ctx.identity.id(),
        &shown,
        ctx.config.attributes(),
    ))
}

fn render_password(ctx: &RenderContext<'_>) -> Result<Html> {
    // Never reflect the current value back into served markup.
    scalar_value(ctx)?;
    Ok(builders::input(
        TextInputType::Password.as_str(),
        ctx.identity.name(),
        &ctx.identity.id(),
        "",
        ctx.config.attributes(),
    ))
}

fn render_single_checkbox(ctx: &RenderContext<'_>) -> Result<Html> {
    let checked = match ctx.value {
        FieldValue::Bool(checked) => *checked,
        FieldValue::Unset => false,
        other => return Err(mismatch(ctx, "a boolean", other)),
    };
    Ok(builders::single_checkbox(
        ctx.identity.name(),
        &ctx.identity.id(),
        checked,
        ctx.config.attributes(),
    ))
}

fn render_choice_list(ctx: &RenderContext<'_>) -> Result<Html> {
    let multi = ctx.metadata.is_multi_valued;
    let strategy = DisplayStrategy::ChoiceList;

    let mut items = Vec::new();
    for option in ctx.candidates() {
        items.push(SelectItem {
            value: option.value.clone(),
            text: option.text().to_string(),
            selected: strategy.is_selected(&option.value, ctx)?,
        });
    }

    // The sentinel "none" option is omitted for required fields and for
    // multi-valued checkbox lists, where an empty choice has no meaning.
    let is_checkbox_list = ctx.config.display_type() == DisplayType::List && multi;
    if !ctx.metadata.is_required && !is_checkbox_list {
        items.insert(
            0,
            SelectItem {
                value: String::new(),
                text: ctx.config.none_string().unwrap_or("None").to_string(),
                selected: ctx.value.is_empty(),
            },
        );
    }

    match ctx.config.display_type() {
        DisplayType::List => render_item_list(ctx, &items, multi),
        _ => Ok(render_select(ctx, &items)),
    }
}

fn render_select(ctx: &RenderContext<'_>, items: &[SelectItem]) -> Html {
    let mut options = Html::empty();
    for item in items {
        options.push(&builders::option(&item.value, &item.text, item.selected));
    }
    builders::select(
        ctx.identity.name(),
        &ctx.identity.id(),
        &options,
        ctx.config.attributes(),
    )
}

/// Radio items for single-valued fields, checkbox items for multi-valued
/// ones. Checkbox items are independent inputs, so each carries the field's
/// validation-state class itself.
fn render_item_list(ctx: &RenderContext<'_>, items: &[SelectItem], multi: bool) -> Result<Html> {
    let mut rendered = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_id = ctx.identity.item_id(index + 1);
        let mut attrs = ctx.config.attributes().clone();
        attrs.attr("id", &item_id);
        if item.selected {
            attrs.attr("checked", "checked");
        }
        if multi && ctx.validation == ValidationState::Invalid {
            attrs.add_class(VALIDATION_INPUT_CLASS);
        }

        let input_type = if multi { "checkbox" } else { "radio" };
        let mut entry = builders::input(
            input_type,
            ctx.identity.name(),
            &item_id,
            &item.value,
            &attrs,
        );
        entry.push_raw(" ");
        entry.push(&builders::label(
            &item_id,
            &Html::text(&item.text),
            &HtmlAttributes::new(),
        ));
        rendered.push(entry);
    }
    Ok(builders::list(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::DefinitionListTemplate;
    use crate::traits::FieldParent;

    fn identity() -> FieldIdentity {
        FieldIdentity::new("Pet.Breed").unwrap()
    }

    fn resolved(config: FieldConfig, metadata: &FieldMetadata) -> ResolvedConfig {
        crate::resolve::prepare(
            Some(config),
            &identity(),
            metadata,
            &DefinitionListTemplate,
            FieldParent::Form,
        )
        .unwrap()
    }

    fn choice_metadata() -> FieldMetadata {
        FieldMetadata::of(UnderlyingKind::Choice).with_options([
            ChoiceOption::new("alpha"),
            ChoiceOption::new("beta"),
            ChoiceOption::new("gamma"),
        ])
    }

    fn render(
        metadata: &FieldMetadata,
        config: FieldConfig,
        value: FieldValue,
    ) -> Result<Html> {
        let identity = identity();
        let resolved = resolved(config, metadata);
        let strategy = DisplayStrategy::route(metadata, resolved.display_type()).unwrap();
        strategy.render(&RenderContext {
            identity: &identity,
            metadata,
            config: &resolved,
            value: &value,
            items: None,
            validation: ValidationState::Unvalidated,
        })
    }

    // --- Routing ---

    #[test]
    fn routes_by_underlying_kind() {
        let cases = [
            (UnderlyingKind::Boolean, DisplayStrategy::SingleCheckbox),
            (UnderlyingKind::Choice, DisplayStrategy::ChoiceList),
            (UnderlyingKind::Password, DisplayStrategy::Password),
            (
                UnderlyingKind::Text,
                DisplayStrategy::TextInput(TextInputType::Text),
            ),
            (
                UnderlyingKind::Number,
                DisplayStrategy::TextInput(TextInputType::Number),
            ),
            (
                UnderlyingKind::Date,
                DisplayStrategy::TextInput(TextInputType::Date),
            ),
            (
                UnderlyingKind::Email,
                DisplayStrategy::TextInput(TextInputType::Email),
            ),
            (
                UnderlyingKind::Url,
                DisplayStrategy::TextInput(TextInputType::Url),
            ),
        ];
        for (kind, expected) in cases {
            let metadata = FieldMetadata::of(kind);
            let routed = DisplayStrategy::route(&metadata, DisplayType::Default).unwrap();
            assert_eq!(routed, expected, "kind {kind}");
        }
    }

    #[test]
    fn explicit_display_honored_for_choice_fields() {
        let metadata = choice_metadata();
        assert_eq!(
            DisplayStrategy::route(&metadata, DisplayType::List).unwrap(),
            DisplayStrategy::ChoiceList
        );
        assert_eq!(
            DisplayStrategy::route(&metadata, DisplayType::DropDown).unwrap(),
            DisplayStrategy::ChoiceList
        );
    }

    #[test]
    fn explicit_display_conflicts_without_choice_set() {
        let metadata = FieldMetadata::of(UnderlyingKind::Text);
        let err = DisplayStrategy::route(&metadata, DisplayType::List).unwrap_err();
        assert!(matches!(err, FormError::ConfigurationConflict { .. }));

        let metadata = FieldMetadata::of(UnderlyingKind::Boolean);
        let err = DisplayStrategy::route(&metadata, DisplayType::DropDown).unwrap_err();
        assert!(matches!(err, FormError::ConfigurationConflict { .. }));
    }

    // --- Text / password ---

    #[test]
    fn text_input_renders_value_and_type() {
        let metadata = FieldMetadata::of(UnderlyingKind::Email);
        let html = render(&metadata, FieldConfig::new(), FieldValue::Scalar("a@b.c".into()))
            .unwrap();
        assert!(html.as_str().contains("type=\"email\""));
        assert!(html.as_str().contains("value=\"a@b.c\""));
        assert!(html.as_str().contains("name=\"Pet.Breed\""));
        assert!(html.as_str().contains("id=\"Pet_Breed\""));
    }

    #[test]
    fn text_input_applies_format_string() {
        let metadata = FieldMetadata::of(UnderlyingKind::Number).with_edit_format("{0}.00");
        let html =
            render(&metadata, FieldConfig::new(), FieldValue::Scalar("42".into())).unwrap();
        assert!(html.as_str().contains("value=\"42.00\""));
    }

    #[test]
    fn text_input_rejects_collection_value() {
        let metadata = FieldMetadata::of(UnderlyingKind::Text);
        let err = render(
            &metadata,
            FieldConfig::new(),
            FieldValue::Many(vec!["x".into()]),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { .. }));
    }

    #[test]
    fn password_never_echoes_value() {
        let metadata = FieldMetadata::of(UnderlyingKind::Password);
        for secret in ["hunter2", "correct horse battery staple"] {
            let html = render(
                &metadata,
                FieldConfig::new(),
                FieldValue::Scalar(secret.into()),
            )
            .unwrap();
            assert!(!html.as_str().contains(secret));
            assert!(html.as_str().contains("value=\"\""));
            assert!(html.as_str().contains("type=\"password\""));
        }
    }

    // --- Single checkbox ---

    #[test]
    fn boolean_renders_checkbox_with_hidden_sibling() {
        let metadata = FieldMetadata::of(UnderlyingKind::Boolean).required();
        let html = render(&metadata, FieldConfig::new(), FieldValue::Bool(true)).unwrap();
        assert!(html.as_str().contains("type=\"checkbox\""));
        assert!(html.as_str().contains("checked=\"checked\""));
        assert!(html.as_str().contains("required=\"required\""));
        assert!(html.as_str().contains("type=\"hidden\""));
        // No sentinel option anywhere near a checkbox.
        assert!(!html.as_str().contains("None"));
    }

    #[test]
    fn unset_boolean_is_unchecked() {
        let metadata = FieldMetadata::of(UnderlyingKind::Boolean);
        let html = render(&metadata, FieldConfig::new(), FieldValue::Unset).unwrap();
        assert!(!html.as_str().contains("checked=\"checked\""));
    }

    #[test]
    fn boolean_rejects_scalar_value() {
        let metadata = FieldMetadata::of(UnderlyingKind::Boolean);
        let err = render(
            &metadata,
            FieldConfig::new(),
            FieldValue::Scalar("true".into()),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { .. }));
    }

    // --- Dropdowns ---

    #[test]
    fn optional_choice_gets_sentinel_option() {
        // Optional enum of three values: four options, none selected while
        // the value is unset.
        let html = render(&choice_metadata(), FieldConfig::new(), FieldValue::Unset).unwrap();
        assert_eq!(html.as_str().matches("<option").count(), 4);
        assert!(html
            .as_str()
            .contains("<option value=\"\" selected=\"selected\">None</option>"));
        assert_eq!(html.as_str().matches("selected=\"selected\"").count(), 1);
    }

    #[test]
    fn required_choice_has_no_sentinel() {
        let html = render(
            &choice_metadata().required(),
            FieldConfig::new(),
            FieldValue::Scalar("beta".into()),
        )
        .unwrap();
        assert_eq!(html.as_str().matches("<option").count(), 3);
        assert!(!html.as_str().contains("value=\"\""));
    }

    #[test]
    fn sentinel_uses_configured_none_string() {
        let html = render(
            &choice_metadata(),
            FieldConfig::new().with_none_as("(no preference)"),
            FieldValue::Unset,
        )
        .unwrap();
        assert!(html.as_str().contains(">(no preference)</option>"));
    }

    #[test]
    fn scalar_value_selects_matching_option() {
        let html = render(
            &choice_metadata(),
            FieldConfig::new(),
            FieldValue::Scalar("beta".into()),
        )
        .unwrap();
        assert!(html
            .as_str()
            .contains("<option value=\"beta\" selected=\"selected\">beta</option>"));
        assert_eq!(html.as_str().matches("selected=\"selected\"").count(), 1);
    }

    #[test]
    fn multi_valued_drop_down_selects_members() {
        let metadata = choice_metadata().multi_valued();
        let html = render(
            &metadata,
            FieldConfig::new(),
            FieldValue::Many(vec!["alpha".into(), "gamma".into()]),
        )
        .unwrap();
        assert!(html.as_str().contains("multiple=\"multiple\""));
        assert!(html
            .as_str()
            .contains("<option value=\"alpha\" selected=\"selected\">"));
        assert!(html
            .as_str()
            .contains("<option value=\"gamma\" selected=\"selected\">"));
        assert!(!html
            .as_str()
            .contains("<option value=\"beta\" selected=\"selected\">"));
    }

    #[test]
    fn multi_valued_field_rejects_scalar() {
        let metadata = choice_metadata().multi_valued();
        let err = render(
            &metadata,
            FieldConfig::new(),
            FieldValue::Scalar("alpha".into()),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { .. }));
    }

    // --- Radio / checkbox lists ---

    #[test]
    fn single_valued_list_renders_radios_with_indexed_ids() {
        let html = render(
            &choice_metadata(),
            FieldConfig::new().as_list(),
            FieldValue::Scalar("beta".into()),
        )
        .unwrap();
        assert!(html.as_str().starts_with("<ul>"));
        assert!(html.as_str().contains("type=\"radio\""));
        // Sentinel takes index 1; real options follow.
        assert!(html.as_str().contains("id=\"Pet_Breed_1\""));
        assert!(html.as_str().contains("id=\"Pet_Breed_4\""));
        assert!(html.as_str().contains("<label for=\"Pet_Breed_3\">beta</label>"));
    }

    #[test]
    fn multi_valued_list_renders_checkboxes_without_sentinel() {
        let metadata = choice_metadata().multi_valued();
        let html = render(
            &metadata,
            FieldConfig::new().as_list(),
            FieldValue::Many(vec!["alpha".into()]),
        )
        .unwrap();
        assert!(html.as_str().contains("type=\"checkbox\""));
        assert!(!html.as_str().contains("None"));
        assert_eq!(html.as_str().matches("<li>").count(), 3);
        assert!(html.as_str().contains("checked=\"checked\""));
    }

    #[test]
    fn invalid_checkbox_list_items_carry_validation_class() {
        let identity = identity();
        let metadata = choice_metadata().multi_valued();
        let config = resolved(FieldConfig::new().as_list(), &metadata);
        let strategy = DisplayStrategy::route(&metadata, config.display_type()).unwrap();
        let value = FieldValue::Many(vec![]);
        let html = strategy
            .render(&RenderContext {
                identity: &identity,
                metadata: &metadata,
                config: &config,
                value: &value,
                items: None,
                validation: ValidationState::Invalid,
            })
            .unwrap();
        assert_eq!(
            html.as_str().matches(VALIDATION_INPUT_CLASS).count(),
            3,
            "every checkbox carries the class"
        );
    }

    #[test]
    fn invalid_radio_list_items_do_not_carry_validation_class() {
        let identity = identity();
        let metadata = choice_metadata();
        let config = resolved(FieldConfig::new().as_list(), &metadata);
        let strategy = DisplayStrategy::route(&metadata, config.display_type()).unwrap();
        let value = FieldValue::Unset;
        let html = strategy
            .render(&RenderContext {
                identity: &identity,
                metadata: &metadata,
                config: &config,
                value: &value,
                items: None,
                validation: ValidationState::Invalid,
            })
            .unwrap();
        assert!(!html.as_str().contains(VALIDATION_INPUT_CLASS));
    }

    #[test]
    fn render_time_items_override_metadata_options() {
        let identity = identity();
        let metadata = choice_metadata();
        let config = resolved(FieldConfig::new(), &metadata);
        let strategy = DisplayStrategy::route(&metadata, config.display_type()).unwrap();
        let items = [ChoiceOption::labelled("x", "Extra")];
        let value = FieldValue::Unset;
        let html = strategy
            .render(&RenderContext {
                identity: &identity,
                metadata: &metadata,
                config: &config,
                value: &value,
                items: Some(&items),
                validation: ValidationState::Unvalidated,
            })
            .unwrap();
        assert!(html.as_str().contains(">Extra</option>"));
        assert!(!html.as_str().contains(">alpha</option>"));
    }

    // --- Selection semantics ---

    #[test]
    fn selection_is_membership_for_multi_and_equality_for_single() {
        let identity = identity();
        let multi = choice_metadata().multi_valued();
        let single = choice_metadata();
        let multi_config = resolved(FieldConfig::new(), &multi);
        let single_config = resolved(FieldConfig::new(), &single);
        let strategy = DisplayStrategy::ChoiceList;

        let value = FieldValue::Many(vec!["alpha".into(), "beta".into()]);
        let ctx = RenderContext {
            identity: &identity,
            metadata: &multi,
            config: &multi_config,
            value: &value,
            items: None,
            validation: ValidationState::Unvalidated,
        };
        assert!(strategy.is_selected("alpha", &ctx).unwrap());
        assert!(strategy.is_selected("beta", &ctx).unwrap());
        assert!(!strategy.is_selected("gamma", &ctx).unwrap());

        let value = FieldValue::Scalar("beta".into());
        let ctx = RenderContext {
            identity: &identity,
            metadata: &single,
            config: &single_config,
            value: &value,
            items: None,
            validation: ValidationState::Unvalidated,
        };
        assert!(strategy.is_selected("beta", &ctx).unwrap());
        assert!(!strategy.is_selected("alpha", &ctx).unwrap());
    }
}
