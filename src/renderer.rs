//! Template rendering functionality for widgetdoc.
//! Wraps MiniJinja behind a small trait so the pipeline only depends on
//! "template text plus context in, document text out".

use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered document text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the rendering policy the
    /// document templates rely on: undefined fields render as empty text,
    /// even through nested lookups like `customize.connector.name` when the
    /// whole section is absent, and nothing is ever HTML-escaped, since the
    /// output is raw MDX.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template body is malformed
    ///   (unbalanced blocks) or rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("doc", template).map_err(Error::TemplateError)?;

        let tmpl = env.get_template("doc").map_err(Error::TemplateError)?;

        tmpl.render(context).map_err(Error::TemplateError)
    }
}
