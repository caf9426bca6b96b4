//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in country table
//! template pre-registered. HTML escaping is disabled: templates produce
//! source code, and values are inserted exactly as they appear in the
//! dataset.
//!
//! # Examples
//!
//! ```
//! use iso_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "// {{name}}").unwrap();
//! let out = engine.render("greeting", &json!({"name": "Côte d'Ivoire"})).unwrap();
//! assert_eq!(out, "// Côte d'Ivoire");
//! ```

use handlebars::Handlebars;
use iso_core::{Error, Result};
use serde::Serialize;

/// Name of the built-in template that renders a Rust static array.
pub const RUST_COUNTRY_TABLE: &str = "rust/country_table";

/// Template engine for code generation.
///
/// Wraps Handlebars and provides the pre-registered templates used by the
/// renderers in this crate.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Generated code must carry names verbatim
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_rust_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers the Rust output templates.
    fn register_rust_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                RUST_COUNTRY_TABLE,
                include_str!("../templates/rust/country_table.rs.hbs"),
            )
            .map_err(|e| Error::RenderError {
                message: format!("Failed to register rust country table template: {e}"),
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable referenced by the template is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::RenderError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// Registering under an existing name replaces that template.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::RenderError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
