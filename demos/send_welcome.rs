// ABOUTME: Example flow that renders a welcome email body from templates
// ABOUTME: Loads a named configuration, renders welcome.html, and prints it

use std::collections::HashMap;

use minijinja::value::Value;
use tracing_subscriber::EnvFilter;

use vellum::{render_from_template, ConfigStore, EnvironmentConfig, InMemoryStore, RunContext};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = InMemoryStore::new();
    store
        .save(
            "email-templates",
            &EnvironmentConfig::new()
                .with_search_path("demos/templates")
                .with_variable("sender_mail", "sender@example.com"),
        )
        .await?;

    let configuration = store.load("email-templates").await?;
    let run_context = RunContext::new().with_tags(["onboarding"]);

    let mut variables = HashMap::new();
    variables.insert("username".to_string(), Value::from("Jeronimo"));

    let body = render_from_template("welcome.html", &configuration, &run_context, &variables).await?;

    // An email task would take it from here; we just show the body.
    println!("{}", body);
    Ok(())
}
