//! Element builders for the shapes a form field is made of.
//!
//! These take pre-encoded [`Html`] content plus an attribute bag and emit
//! the final element markup. Higher layers decide *what* to build; nothing
//! here inspects field semantics.

use crate::attrs::HtmlAttributes;
use crate::fragment::Html;

/// Build a `<label>` element pointing at `target_id`.
pub fn label(target_id: &str, content: &Html, attrs: &HtmlAttributes) -> Html {
    let mut for_attrs = attrs.clone();
    for_attrs.attr("for", target_id);
    Html::raw(format!("<label{}>{}</label>", for_attrs.to_markup(), content))
}

/// Build an `<input>` element. `name` and `type` always come from the
/// caller; an `id` already present in `attrs` wins over the caller's.
pub fn input(input_type: &str, name: &str, id: &str, value: &str, attrs: &HtmlAttributes) -> Html {
    let mut all = HtmlAttributes::new();
    all.attr("type", input_type);
    all.attr_if_absent("id", attrs.get("id").unwrap_or(id));
    all.attr("name", name);
    all.attr("value", value);
    for (k, v) in attrs.iter() {
        if k != "id" {
            all.attr(k, v);
        }
    }
    Html::raw(format!("<input{} />", all.to_markup()))
}

/// Build a checkbox `<input>` paired with a hidden `false` sibling so an
/// unchecked box still posts a value.
pub fn single_checkbox(name: &str, id: &str, checked: bool, attrs: &HtmlAttributes) -> Html {
    let mut box_attrs = attrs.clone();
    if checked {
        box_attrs.attr("checked", "checked");
    }
    let mut html = input("checkbox", name, id, "true", &box_attrs);
    html.push(&hidden(name, "false"));
    html
}

/// Build a hidden `<input>`.
pub fn hidden(name: &str, value: &str) -> Html {
    Html::raw(format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\" />",
        html_escape::encode_double_quoted_attribute(name),
        html_escape::encode_double_quoted_attribute(value),
    ))
}

/// Build an `<option>` element.
pub fn option(value: &str, text: &str, selected: bool) -> Html {
    let mut attrs = HtmlAttributes::new();
    attrs.attr("value", value);
    if selected {
        attrs.attr("selected", "selected");
    }
    Html::raw(format!(
        "<option{}>{}</option>",
        attrs.to_markup(),
        html_escape::encode_text(text)
    ))
}

/// Build a `<select>` element around pre-built `<option>` markup.
pub fn select(name: &str, id: &str, options: &Html, attrs: &HtmlAttributes) -> Html {
    let mut all = HtmlAttributes::new();
    all.attr("id", attrs.get("id").unwrap_or(id));
    all.attr("name", name);
    for (k, v) in attrs.iter() {
        if k != "id" {
            all.attr(k, v);
        }
    }
    Html::raw(format!("<select{}>{}</select>", all.to_markup(), options))
}

/// Wrap pre-built items in a `<ul>` list, one `<li>` per item.
pub fn list(items: impl IntoIterator<Item = Html>) -> Html {
    let mut html = Html::raw("<ul>");
    for item in items {
        html.push_raw("<li>");
        html.push(&item);
        html.push_raw("</li>");
    }
    html.push_raw("</ul>");
    html
}

/// Build a generic element with encoded content.
pub fn element(tag: &str, content: &Html, attrs: &HtmlAttributes) -> Html {
    Html::raw(format!("<{tag}{}>{}</{tag}>", attrs.to_markup(), content))
}
