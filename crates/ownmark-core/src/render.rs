//! Template rendering.
//!
//! Variable substitution over a user-supplied plain-text template, delegated
//! to handlebars. Dotted paths address nested model fields
//! (`{{owner.name}}`, `{{attest.hash.hex}}`).
//!
//! ## Missing-Placeholder Policy
//!
//! Strict: a placeholder whose dotted path does not resolve in the model is
//! a `Template` error rather than rendering empty. A silently blank field in
//! an ownership document is worse than a failed run.

use crate::errors::{OwnmarkError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Renderer behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// HTML-escape substituted values. Attestations are plain text, so this
    /// is off by default.
    pub escape_output: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            escape_output: false,
        }
    }
}

/// Template renderer over a configured handlebars registry
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        if !config.escape_output {
            registry.register_escape_fn(handlebars::no_escape);
        }
        Self { registry }
    }

    /// Fill `template_text` with the serialized model.
    ///
    /// Pure: identical template and model yield byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns a `Template` error on syntax errors or unresolved
    /// placeholders.
    pub fn render<T: Serialize>(&self, template_text: &str, model: &T) -> Result<String> {
        self.registry
            .render_template(template_text, model)
            .map_err(|e| OwnmarkError::Template {
                message: e.to_string(),
            })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

/// Wrap text at a fixed column width by inserting newlines.
///
/// A formatting helper for long base64 runs, not a data transformation:
/// stripping the inserted whitespace recovers the input exactly.
pub fn wrap_columns(text: &str, width: usize) -> String {
    if width == 0 || text.len() <= width {
        return text.to_string();
    }
    let mut wrapped = String::with_capacity(text.len() + text.len() / width + 1);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    wrapped
}
