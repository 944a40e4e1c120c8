// ABOUTME: Render task implementations for template files and inline strings
// ABOUTME: Handles environment construction, context injection, and rendering

use minijinja::value::Value;
use minijinja::Environment;
use std::collections::HashMap;
use tracing::debug;

use crate::context::RunContext;
use crate::template::{EnvironmentConfig, Result, TemplateError};

/// Render a named template resolved under the configuration's search path.
///
/// Call-time `variables` shadow the configuration's namespace on key
/// collision. The reserved `context` variable always comes from
/// `run_context`, even when the caller passes one of its own.
///
/// Fails with [`TemplateError::Configuration`] when the configuration has no
/// search path, [`TemplateError::TemplateNotFound`] when `name` does not
/// resolve, and [`TemplateError::Syntax`] when the template source is
/// malformed.
pub async fn render_from_template(
    name: &str,
    configuration: &EnvironmentConfig,
    run_context: &RunContext,
    variables: &HashMap<String, Value>,
) -> Result<String> {
    if configuration.search_path.is_none() {
        return Err(TemplateError::Configuration(
            "search_path is not set; file-based rendering is unavailable".to_string(),
        ));
    }

    let env = configuration.build_environment();
    let template = env.get_template(name).map_err(|err| match err.kind() {
        minijinja::ErrorKind::TemplateNotFound => TemplateError::TemplateNotFound {
            name: name.to_string(),
        },
        _ => TemplateError::from(err),
    })?;

    let rendered = template.render(merge_variables(variables, run_context))?;

    debug!("Rendered template {} ({} bytes)", name, rendered.len());
    Ok(rendered)
}

/// Render an inline template string.
///
/// No loader is attached, so inline templates cannot extend or include
/// named templates. Fails with [`TemplateError::Syntax`] on malformed
/// source.
pub async fn render_from_string(
    template_text: &str,
    run_context: &RunContext,
    variables: &HashMap<String, Value>,
) -> Result<String> {
    let env = Environment::new();
    let rendered = env.render_str(template_text, merge_variables(variables, run_context))?;

    debug!("Rendered inline template ({} bytes)", rendered.len());
    Ok(rendered)
}

// The `context` entry is inserted after the caller's variables so the run
// context wins on collision.
fn merge_variables(variables: &HashMap<String, Value>, run_context: &RunContext) -> Value {
    let mut merged = variables.clone();
    merged.insert("context".to_string(), run_context.to_value());
    Value::from_serialize(&merged)
}
