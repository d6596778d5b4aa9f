//! Handlebars-based LaTeX template renderer

use crate::error::{ResumeError, Result};
use handlebars::{no_escape, Handlebars};
use resume_types::Resume;
use std::path::Path;

const TEMPLATE_NAME: &str = "resume";

/// Renders an escaped resume into LaTeX markup.
///
/// Constructed once at pipeline start and shared read-only across workers.
/// HTML escaping is disabled; LaTeX escaping happens in the typed visitor
/// before values reach the template.
pub struct TexRenderer {
    registry: Handlebars<'static>,
}

impl TexRenderer {
    /// Load the template from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut registry = new_registry();
        registry
            .register_template_file(TEMPLATE_NAME, &path)
            .map_err(|e| ResumeError::Render(format!("Failed to load template: {}", e)))?;

        Ok(Self { registry })
    }

    /// Register the template from a string (used by tests)
    pub fn from_template_str(template: &str) -> Result<Self> {
        let mut registry = new_registry();
        registry
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| ResumeError::Render(format!("Failed to parse template: {}", e)))?;

        Ok(Self { registry })
    }

    /// Expand the template with the (already escaped) resume
    pub fn render(&self, resume: &Resume) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, resume)
            .map_err(|e| ResumeError::Render(e.to_string()))
    }
}

fn new_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(false);
    // Values are LaTeX-escaped upstream; HTML escaping would corrupt them.
    registry.register_escape_fn(no_escape);
    registry
}
