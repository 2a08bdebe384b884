use crate::capability::Tool;
use crate::ctx::Context;
use crate::error::StepError;
use serde_json::{Value, json};

/// Drop a surrounding Markdown code fence, if any.
pub fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        // A lone fence has no content between the markers.
        if lines.len() < 2 {
            return String::new();
        }
        // Skip first line (```json) and last line (```)
        lines[1..lines.len() - 1].join("\n")
    } else {
        trimmed.to_string()
    }
}

/// Parse JSON out of free-form text (e.g. a model response), tolerating a
/// surrounding code fence. Returns the parsed value as the step result.
pub struct ExtractJson;

impl Tool for ExtractJson {
    fn name(&self) -> &str {
        "extract_json"
    }

    fn description(&self) -> &str {
        "Strip code fences from text and parse the remainder as JSON"
    }

    fn parameters(&self) -> Value {
        json!({
            "text": { "type": "string", "description": "Text containing a JSON document" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let text = params["text"]
            .as_str()
            .ok_or_else(|| StepError::invalid("text must be a string"))?;
        let parsed: Value = serde_json::from_str(&strip_code_fences(text))?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_well_formed() {
        assert!(crate::schema::validate_definition(&ExtractJson.parameters()).is_empty());
    }

    #[test]
    fn strips_fences() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  plain  "), "plain");
    }

    #[test]
    fn lone_fence_yields_empty_string() {
        assert_eq!(strip_code_fences("```"), "");
        assert_eq!(strip_code_fences("  ```  "), "");
    }

    #[test]
    fn fence_only_input_is_an_invalid_error_not_a_panic() {
        let mut ctx = Context::new();
        let result = ExtractJson.execute(&json!({ "text": "```" }), &mut ctx);
        assert!(matches!(result, Err(StepError::Invalid(_))));
    }

    #[test]
    fn extracts_fenced_json() {
        let mut ctx = Context::new();
        let result = ExtractJson
            .execute(
                &json!({ "text": "```json\n{\"a\": [1, 2]}\n```" }),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(result, json!({ "a": [1, 2] }));
    }

    #[test]
    fn extracts_bare_json() {
        let mut ctx = Context::new();
        let result = ExtractJson
            .execute(&json!({ "text": "{\"ok\": true}" }), &mut ctx)
            .unwrap();
        assert_eq!(result, json!({ "ok": true }));
    }

    #[test]
    fn invalid_json_is_an_invalid_error() {
        let mut ctx = Context::new();
        let result = ExtractJson.execute(&json!({ "text": "not json" }), &mut ctx);
        assert!(matches!(result, Err(StepError::Invalid(_))));
    }
}
