// ABOUTME: Error types for template environment and render operations
// ABOUTME: Classifies engine failures into configuration, lookup, and syntax errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Template render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => TemplateError::TemplateNotFound {
                name: err.name().unwrap_or("<unnamed>").to_string(),
            },
            minijinja::ErrorKind::SyntaxError => TemplateError::Syntax(err.to_string()),
            _ => TemplateError::Render(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
