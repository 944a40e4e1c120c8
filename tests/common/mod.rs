// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp template directories, frozen contexts, and variable maps

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use minijinja::value::Value;
use tempfile::TempDir;
use tokio::fs;

use vellum::{EnvironmentConfig, RunContext};

pub struct TemplateFixture {
    dir: TempDir,
}

impl TemplateFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub async fn write_template(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)
            .await
            .expect("Failed to write template");
    }

    pub fn config(&self) -> EnvironmentConfig {
        EnvironmentConfig::new().with_search_path(self.dir.path())
    }
}

pub fn frozen_context() -> RunContext {
    let start_time: DateTime<Utc> = "2024-03-01T09:10:11Z".parse().unwrap();
    RunContext::new()
        .with_run_id("6b1f6f6e-1234-4abc-8def-000000000000")
        .with_start_time(start_time)
        .with_tags(["email", "nightly"])
}

pub fn vars(entries: &[(&str, &str)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect()
}
