use std::time::Duration;

use crate::capability::Tool;
use crate::ctx::Context;
use crate::error::StepError;
use serde_json::{Value, json};
use ureq::Agent;

fn agent() -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(5)))
        .build();
    config.into()
}

/// Fetch a URL with a GET request and return `{"body": <string>}`.
pub struct HttpGet;

impl Tool for HttpGet {
    fn name(&self) -> &str {
        "http_get"
    }

    fn description(&self) -> &str {
        "Send a GET request and return the response body"
    }

    fn parameters(&self) -> Value {
        json!({
            "url": { "type": "string", "description": "Request URL" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let url = params["url"]
            .as_str()
            .ok_or_else(|| StepError::invalid("url must be a string"))?;

        let body: String = agent().get(url).call()?.body_mut().read_to_string()?;

        Ok(json!({ "body": body }))
    }
}

/// POST to a URL with either a raw string body or a JSON body and return
/// `{"body": <string>}`.
pub struct HttpPost;

impl Tool for HttpPost {
    fn name(&self) -> &str {
        "http_post"
    }

    fn description(&self) -> &str {
        "Send a POST request and return the response body"
    }

    fn parameters(&self) -> Value {
        json!({
            "url": { "type": "string", "description": "Request URL" },
            "body": { "type": "string", "nullable": true, "description": "Raw request body" },
            "json": { "type": "any", "nullable": true, "description": "JSON request body, takes precedence over 'body'" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let url = params["url"]
            .as_str()
            .ok_or_else(|| StepError::invalid("url must be a string"))?;

        let mut response = match params.get("json") {
            Some(body) if !body.is_null() => agent().post(url).send_json(body)?,
            _ => {
                let body = params["body"].as_str().unwrap_or("");
                agent().post(url).send(body)?
            }
        };

        let body = response.body_mut().read_to_string()?;

        Ok(json!({ "body": body }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schemas_are_well_formed() {
        assert!(crate::schema::validate_definition(&HttpGet.parameters()).is_empty());
        assert!(crate::schema::validate_definition(&HttpPost.parameters()).is_empty());
    }

    #[test]
    fn get_bad_url_returns_error() {
        let mut ctx = Context::new();
        let result = HttpGet.execute(&json!({ "url": "http://localhost:1/nope" }), &mut ctx);
        assert!(result.is_err());
    }

    #[test]
    fn post_bad_url_returns_error() {
        let mut ctx = Context::new();
        let result = HttpPost.execute(
            &json!({ "url": "http://localhost:1/nope", "json": { "key": "value" } }),
            &mut ctx,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_string_url_is_invalid() {
        let mut ctx = Context::new();
        let result = HttpGet.execute(&json!({ "url": 7 }), &mut ctx);
        assert!(matches!(result, Err(StepError::Invalid(_))));
    }
}
