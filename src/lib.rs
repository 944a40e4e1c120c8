// ABOUTME: Main library module for the vellum template rendering crate
// ABOUTME: Exports all core modules and provides the public API

pub mod context;
pub mod store;
pub mod tasks;
pub mod template;

// Re-export commonly used types
pub use context::RunContext;
pub use store::{ConfigStore, FileStore, InMemoryStore};
pub use tasks::{render_from_string, render_from_template};
pub use template::{EnvironmentConfig, TemplateError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
