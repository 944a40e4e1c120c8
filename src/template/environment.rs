// ABOUTME: Environment configuration for the minijinja template engine
// ABOUTME: Builds per-call engine environments with loader, escaping, and globals

use minijinja::value::Value;
use minijinja::{default_auto_escape_callback, path_loader, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Reusable configuration for a template-rendering environment.
///
/// Instances hold the template search path and the variables that should be
/// available to every template rendered through them. They are value
/// objects: render operations build a fresh environment per call and never
/// mutate the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Variables available in every template loaded by the environment.
    #[serde(default)]
    pub namespace: HashMap<String, Option<String>>,

    /// Path to the directory that contains the templates. Can be relative
    /// or absolute; relative paths are relative to the current working
    /// directory. Unset means only inline-string rendering is supported.
    #[serde(default)]
    pub search_path: Option<PathBuf>,
}

impl EnvironmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.namespace.insert(key.into(), Some(value.into()));
        self
    }

    pub fn with_namespace(mut self, namespace: HashMap<String, Option<String>>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Create a template environment with a loader that looks up templates
    /// in the `search_path`.
    ///
    /// Auto-escaping follows the template name (HTML/XML names are escaped,
    /// everything else is left verbatim). Namespace values are copied into
    /// the environment, so mutating the configuration afterwards does not
    /// affect an already-built environment.
    pub fn build_environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);

        if let Some(path) = &self.search_path {
            env.set_loader(path_loader(path.clone()));
        }

        for (name, value) in &self.namespace {
            env.add_global(name.clone(), Value::from_serialize(value));
        }

        env
    }
}
