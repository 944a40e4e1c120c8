// ABOUTME: Template environment module for vellum render tasks
// ABOUTME: Provides environment configuration and render error types

pub mod environment;
pub mod error;

pub use environment::EnvironmentConfig;
pub use error::{Result, TemplateError};
