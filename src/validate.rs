//! Validation of caller input against a parameters definition.
//!
//! This is the engine's externally observed contract: the exact error
//! strings (and their `a.b[2]`-style paths) surface in the in-band
//! `{"error": ...}` results a workflow produces on bad input, so the
//! recursion and path naming here are load-bearing.

use serde_json::Value;

/// The outcome of checking one input value against a schema: pass/fail
/// plus every path-qualified problem found in a single pass.
#[derive(Debug)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    /// All errors joined into the message used for in-band error results.
    pub fn message(&self) -> String {
        self.errors.join(", ")
    }
}

/// Validate `input` against a parameters definition.
///
/// Each declared top-level parameter is checked recursively; object
/// properties extend the path with `.key` and array elements with `[i]`.
/// The walk never short-circuits: everything wrong with one input is
/// reported at once. Undeclared input keys are ignored.
pub fn validate_input(input: &Value, parameters: &Value) -> Validation {
    let mut errors = Vec::new();
    if let Some(map) = parameters.as_object() {
        for (key, schema) in map {
            validate_value(input.get(key), schema, key, false, &mut errors);
        }
    }
    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

fn validate_value(
    value: Option<&Value>,
    schema: &Value,
    path: &str,
    required_by_parent: bool,
    errors: &mut Vec<String>,
) {
    let nullable = schema
        .get("nullable")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let value = match value {
        None | Some(Value::Null) => {
            if !nullable {
                if required_by_parent {
                    errors.push(format!("Missing required property: {path}"));
                } else {
                    errors.push(format!("Property {path} is required and cannot be null"));
                }
            }
            return;
        }
        Some(value) => value,
    };

    match schema.get("type").and_then(Value::as_str).unwrap_or("") {
        "any" => {}

        "string" => match value.as_str() {
            None => errors.push(format!(
                "Expected string at {path}, got {}",
                type_name(value)
            )),
            Some(s) => {
                if schema.get("format").and_then(Value::as_str) == Some("date-time")
                    && chrono::DateTime::parse_from_rfc3339(s).is_err()
                {
                    errors.push(format!("Invalid date-time format at {path}"));
                }
            }
        },

        "number" => {
            if !value.is_number() {
                errors.push(format!(
                    "Expected number at {path}, got {}",
                    type_name(value)
                ));
            }
        }

        "boolean" => {
            if !value.is_boolean() {
                errors.push(format!(
                    "Expected boolean at {path}, got {}",
                    type_name(value)
                ));
            }
        }

        "array" => match value.as_array() {
            None => errors.push(format!("Expected array at {path}, got {}", type_name(value))),
            Some(items) => {
                let item_schema = schema.get("items").unwrap_or(&Value::Null);
                for (idx, item) in items.iter().enumerate() {
                    validate_value(
                        Some(item),
                        item_schema,
                        &format!("{path}[{idx}]"),
                        false,
                        errors,
                    );
                }
            }
        },

        "object" => match value.as_object() {
            None => errors.push(format!(
                "Expected object at {path}, got {}",
                type_name(value)
            )),
            Some(object) => {
                let required: Vec<&str> = schema
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| names.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();

                if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                    for (key, sub) in properties {
                        validate_value(
                            object.get(key),
                            sub,
                            &format!("{path}.{key}"),
                            required.contains(&key.as_str()),
                            errors,
                        );
                    }
                }
            }
        },

        "enum" => {
            let values = schema.get("values").and_then(Value::as_array);
            let matched = values.is_some_and(|allowed| allowed.iter().any(|v| v == value));
            if !matched {
                let allowed = values
                    .map(|vs| {
                        vs.iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                errors.push(format!(
                    "Invalid value at {path}. Expected one of: {allowed}"
                ));
            }
        }

        _ => errors.push(format!("Unknown type for property {path}")),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
