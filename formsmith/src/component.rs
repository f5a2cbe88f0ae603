//! Form and field lifecycle.
//!
//! A [`Form`] owns the output buffer, the collaborator trait objects and
//! the single-slot "current parent field" context. Self-closing fields are
//! one atomic emission; container fields open a wrapper, hand back a
//! [`FieldScope`] for nested children and close on an explicit `close()` or
//! on scope exit, whichever comes first. A fragment is only pushed to the
//! buffer after it rendered successfully — an aborted field leaves no
//! partial markup behind.

use tracing::debug;

use formsmith_fields::{FieldConfig, FieldIdentity, FieldValue};
use formsmith_html::Html;

use crate::error::Result;
use crate::generator::FieldGenerator;
use crate::traits::{FieldParent, FormTemplate, MetadataAdapter, ValidationState, ValidationStateSource};

/// A form being rendered for one request.
///
/// Request-local by construction: the parent-field context lives on this
/// value, never in process-global state.
pub struct Form<'a> {
    template: &'a dyn FormTemplate,
    metadata: &'a dyn MetadataAdapter,
    validation: &'a dyn ValidationStateSource,
    out: String,
    current_parent: Option<FieldIdentity>,
}

impl<'a> Form<'a> {
    pub fn new(
        template: &'a dyn FormTemplate,
        metadata: &'a dyn MetadataAdapter,
        validation: &'a dyn ValidationStateSource,
    ) -> Self {
        Self {
            template,
            metadata,
            validation,
            out: String::new(),
            current_parent: None,
        }
    }

    /// The markup rendered so far.
    pub fn html(&self) -> &str {
        &self.out
    }

    /// Consume the form, returning the rendered markup.
    pub fn into_html(self) -> Html {
        Html::raw(self.out)
    }

    /// The container field currently open, if any.
    pub fn current_parent(&self) -> Option<&FieldIdentity> {
        self.current_parent.as_ref()
    }

    fn generator(&self, path: &str, value: FieldValue) -> Result<FieldGenerator<'a>> {
        let identity = FieldIdentity::new(path)?;
        let metadata = self.metadata.metadata(&identity);
        Ok(FieldGenerator::new(
            identity,
            metadata,
            value,
            self.template,
            self.validation,
        ))
    }

    /// Render a self-closing field: label, input and validation emitted as
    /// one atomic unit. Nested fields go through [`FieldScope::field`],
    /// which is the only way to render while a container is open, so this
    /// always prepares with a form parent.
    pub fn field(&mut self, path: &str, value: FieldValue, config: FieldConfig) -> Result<()> {
        self.render_field(path, value, config, FieldParent::Form, false)?;
        Ok(())
    }

    /// Open a container field. The opening wrapper is emitted immediately;
    /// nested fields render through the returned scope, and the closing
    /// wrapper is emitted on `close()` or scope exit.
    pub fn begin_field(
        &mut self,
        path: &str,
        value: FieldValue,
        config: FieldConfig,
    ) -> Result<FieldScope<'_, 'a>> {
        let identity = self.render_field(path, value, config, FieldParent::Form, true)?;
        debug!(field = %identity, "opened container field");
        self.current_parent = Some(identity);
        Ok(FieldScope {
            form: self,
            closed: false,
        })
    }

    /// Render a standalone label for a bound property.
    pub fn label_for(&self, path: &str, config: FieldConfig) -> Result<Html> {
        let generator = self.generator(path, FieldValue::Unset)?;
        let resolved = generator.prepare(Some(config), FieldParent::Form)?;
        Ok(generator.label_html(&resolved))
    }

    /// Render a standalone field element for a bound property.
    pub fn field_element_for(
        &self,
        path: &str,
        value: FieldValue,
        config: FieldConfig,
    ) -> Result<Html> {
        let generator = self.generator(path, value)?;
        let resolved = generator.prepare(Some(config), FieldParent::Form)?;
        generator.field_html(&resolved, None)
    }

    /// Render a standalone validation message for a bound property.
    pub fn validation_message_for(&self, path: &str, config: FieldConfig) -> Result<Html> {
        let generator = self.generator(path, FieldValue::Unset)?;
        let resolved = generator.prepare(Some(config), FieldParent::Form)?;
        Ok(generator.validation_html(&resolved))
    }

    /// Shared render path for self-closing and container fields. Returns
    /// the field's identity; pushes to the buffer only on success.
    fn render_field(
        &mut self,
        path: &str,
        value: FieldValue,
        config: FieldConfig,
        parent: FieldParent,
        container: bool,
    ) -> Result<FieldIdentity> {
        let generator = self.generator(path, value)?;

        // One validation read drives the css class decision, the checkbox
        // item classes and the template's is_valid flag.
        let validation = generator.validation_state();
        let is_valid = validation != ValidationState::Invalid;

        let resolved = generator.prepare(Some(config), parent)?;
        let label = generator.label_html(&resolved);
        let field = generator.field_html_with(&resolved, None, validation)?;
        let message = generator.validation_html_with(validation);

        let html = if container {
            self.template
                .begin_field(label, field, message, generator.metadata(), &resolved, is_valid)?
        } else {
            self.template
                .field(label, field, message, generator.metadata(), &resolved, is_valid)?
        };
        self.out.push_str(html.as_str());
        Ok(generator.identity().clone())
    }
}

/// An open container field. Nested fields render through it; dropping it
/// closes the container.
pub struct FieldScope<'f, 'a> {
    form: &'f mut Form<'a>,
    closed: bool,
}

impl FieldScope<'_, '_> {
    /// Render a self-closing field nested inside this container.
    pub fn field(&mut self, path: &str, value: FieldValue, config: FieldConfig) -> Result<()> {
        self.form
            .render_field(path, value, config, FieldParent::Section, false)?;
        Ok(())
    }

    /// Close the container, emitting the closing wrapper. Closing an
    /// already-closed container is a no-op.
    pub fn close(mut self) -> Result<()> {
        self.close_inner()
    }

    fn close_inner(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // Clear the parent slot before rendering so a failing template
        // cannot leak parent context into sibling fields.
        self.form.current_parent = None;
        let end = self.form.template.end_field()?;
        self.form.out.push_str(end.as_str());
        Ok(())
    }
}

impl Drop for FieldScope<'_, '_> {
    fn drop(&mut self) {
        // Scope-exit close. Drop cannot propagate a template error; the
        // parent slot is still cleared.
        let _ = self.close_inner();
    }
}
