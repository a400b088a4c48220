//! Standalone HTML documents for previewing or exporting an assembled resume.
//! The page shell is a MiniJinja template; the resume itself is produced by
//! the assembler and inserted as-is.
use crate::assembler::assemble;
use crate::error::Result;
use crate::style::computed_css;
use crate::template::Template;
use minijinja::Environment;
use serde_json::Value;

/// Page shell wrapped around every assembled resume.
pub const DOCUMENT_SHELL: &str = include_str!("document.html.j2");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
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
    /// Ad-hoc template strings are not auto-escaped; templates escape
    /// explicitly with `|e`.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to compile or render
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Title of the page: the resume owner's name, or the template name.
fn document_title(template: &Template, data: &Value) -> String {
    data.get("fullName")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&template.name)
        .to_string()
}

/// Assembles `template` against `data` and wraps it in a full HTML page.
pub fn render_document(
    renderer: &dyn TemplateRenderer,
    template: &Template,
    data: &Value,
) -> Result<String> {
    let context = serde_json::json!({
        "lang": "en",
        "title": document_title(template, data),
        "css": computed_css(template),
        "body": assemble(template, data),
    });
    renderer.render(DOCUMENT_SHELL, &context)
}
