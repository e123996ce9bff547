use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};

use interpose::chain::InterceptionRegistry;
use interpose::errors::InvocationError;
use interpose::interceptors::{outcome_logger, timing};
use interpose::operations::FnOperation;
use interpose::property::{add_offset, ObservableField, TransformedProperty};
use interpose::reports::TracingSink;

/// Demo showing the three interception styles: wrapped operations,
/// change-notifying fields, and transformed property setters.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== interpose demo ===\n");

    // An operation that succeeds or fails depending on its input, wrapped
    // with timing and outcome logging.
    let sink: Arc<TracingSink> = Arc::new(TracingSink::new());
    let mut registry = InterceptionRegistry::new();
    registry.register_operation(Arc::new(FnOperation::new(
        "request",
        |args: Vec<Value>| async move {
            let url = args
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            if url.starts_with("https://") {
                Ok(json!({"status": 200, "url": url}))
            } else {
                Err(InvocationError::Failed {
                    operation: "request".to_string(),
                    message: format!("refusing insecure url '{}'", url),
                })
            }
        },
    )))?;
    registry.register("request", timing(sink.clone()))?;
    registry.register("request", outcome_logger(sink.clone()))?;

    let ok = registry
        .invoke("request", vec![json!("https://example.com")])
        .await?;
    println!("request succeeded with: {}", ok);

    // The failure is absorbed by the outcome logger; the caller sees null.
    let absorbed = registry
        .invoke("request", vec![json!("http://example.com")])
        .await?;
    println!("insecure request returned: {}\n", absorbed);

    // A change-notifying counter field.
    let mut count = ObservableField::new(
        "count",
        Box::new(|prev: Option<&i64>, next: &i64| {
            println!(">>> count has changed! prev: {:?}, next: {}", prev, next);
        }),
    );
    count.set(-1);
    count.set(10);
    println!("count reads back as: {:?}\n", count.get());

    // A point property whose setter adds a constant offset field-wise.
    let mut point = TransformedProperty::new("point");
    point.register(add_offset(2));
    point.set(
        json!({"x": 1, "y": 1})
            .as_object()
            .expect("literal is an object")
            .clone(),
    );
    println!("point reads back as: {}", json!(point.get().clone()));

    Ok(())
}
