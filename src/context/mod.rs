// ABOUTME: Run metadata passed explicitly into render operations
// ABOUTME: Exposes run identity, start time, and tags to templates

use chrono::{DateTime, Utc};
use minijinja::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Metadata describing the unit of work a render call belongs to.
///
/// Constructed fresh for every render call and exposed to templates under
/// the reserved `context` variable. Callers pass it in explicitly; nothing
/// in this crate reads ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    pub run_id: String,
    pub start_time: DateTime<Utc>,
    pub tags: BTreeSet<String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            start_time: Utc::now(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The mapping templates see under the reserved `context` variable.
    pub fn to_value(&self) -> Value {
        Value::from_serialize(self)
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
