//! Executes a single workflow step against the registries.
//!
//! A step failing input validation produces an in-band error value rather
//! than aborting the run; a dangling tool or agent name is a workflow
//! authoring bug and aborts. Handler errors propagate untouched.

use crate::capability::ToolMap;
use crate::config::AgentRef;
use crate::ctx::Context;
use crate::error::EngineError;
use crate::registry::{AgentRegistry, ToolRegistry};
use crate::validate::validate_input;
use serde_json::{Value, json};

/// Build the in-band error value steps return for recoverable failures.
///
/// Downstream steps receive it through
/// [`Context::previous_step_result`] like any other result; the runner
/// does not halt on it.
pub fn error_value(name: &str, message: impl Into<String>) -> Value {
    json!({ "error": { "name": name, "message": message.into() } })
}

/// True when a step result carries the in-band error shape.
pub fn is_error_value(value: &Value) -> bool {
    value.get("error").is_some_and(Value::is_object)
}

pub(crate) fn run_tool_step(
    tools: &ToolRegistry,
    step_name: &str,
    tool_name: &str,
    params: &Value,
    ctx: &mut Context,
) -> Result<Value, EngineError> {
    let tool = tools.get(tool_name)?;

    let validation = validate_input(params, &tool.parameters());
    if !validation.valid {
        return Ok(error_value("Invalid input", validation.message()));
    }

    tool.execute(params, ctx).map_err(|error| EngineError::Handler {
        step: step_name.to_string(),
        error,
    })
}

pub(crate) fn run_agent_step(
    tools: &ToolRegistry,
    agents: &AgentRegistry,
    step_name: &str,
    agent_ref: &AgentRef,
    params: &Value,
    ctx: &mut Context,
) -> Result<Value, EngineError> {
    let agent = agents.get(&agent_ref.name)?;

    let validation = validate_input(params, &agent.parameters());
    if !validation.valid {
        return Ok(error_value("Invalid input", validation.message()));
    }

    // Step-level tool list overrides the agent's declared one.
    let allowed = match &agent_ref.tools {
        Some(names) => names.clone(),
        None => agent.tools(),
    };

    let mut resolved = ToolMap::new();
    for name in &allowed {
        // Names that fail to resolve are skipped, not fatal.
        if let Ok(tool) = tools.get(name) {
            resolved.insert(tool.name(), tool);
        }
    }

    agent
        .task(params, ctx, &resolved)
        .map_err(|error| EngineError::Handler {
            step: step_name.to_string(),
            error,
        })
}
