//! Structural validation of parameter schema definitions.
//!
//! A capability's `parameters()` value is a JSON object mapping parameter
//! names to schema nodes. Before a schema is trusted to validate input it
//! must itself be well-formed; registries call [`validate_definition`] and
//! refuse to register a capability whose schema walks up any errors.

use serde_json::Value;

/// Check that a parameters definition is structurally valid.
///
/// Walks every named entry recursively and accumulates error strings
/// instead of failing fast, so one pass reports everything wrong with the
/// definition. An empty result means the schema can be registered. The
/// function has no side effects and is idempotent.
pub fn validate_definition(parameters: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    match parameters.as_object() {
        Some(map) => {
            for (key, schema) in map {
                validate_node(schema, key, &mut errors);
            }
        }
        None => errors.push("Parameters definition must be an object".to_string()),
    }
    errors
}

fn validate_node(schema: &Value, path: &str, errors: &mut Vec<String>) {
    let Some(node) = schema.as_object() else {
        errors.push(format!("Parameter '{path}' must be an object"));
        return;
    };

    let Some(kind) = node.get("type") else {
        errors.push(format!("Parameter '{path}' is missing 'type'"));
        return;
    };

    match kind.as_str() {
        // Nothing further to declare; "any" accepts every value.
        Some("any") | Some("string") | Some("number") | Some("boolean") => {}

        Some("array") => match node.get("items") {
            Some(items) => validate_node(items, &format!("{path}[]"), errors),
            None => errors.push(format!(
                "Parameter '{path}' of type 'array' must include 'items'"
            )),
        },

        Some("object") => match node.get("properties").and_then(Value::as_object) {
            Some(properties) => {
                for (key, sub) in properties {
                    validate_node(sub, &format!("{path}.{key}"), errors);
                }
            }
            None => errors.push(format!(
                "Parameter '{path}' of type 'object' must include 'properties'"
            )),
        },

        Some("enum") => {
            let well_formed = node
                .get("values")
                .and_then(Value::as_array)
                .is_some_and(|values| !values.is_empty() && values.iter().all(Value::is_string));
            if !well_formed {
                errors.push(format!(
                    "Parameter '{path}' of type 'enum' must have a non-empty 'values' array of strings"
                ));
            }
        }

        _ => errors.push(format!("Parameter '{path}' has unknown type {kind}")),
    }
}
