use serde_json::Value;

/// Records a state-changing command on the `audit` tracing target.
pub fn log_audit(actor: Option<&str>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    tracing::info!(
        target: "audit",
        actor = actor.unwrap_or("-"),
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata.unwrap_or(serde_json::Value::Null),
        "audit"
    );
}
