use crate::ctx::Context;
use crate::error::StepError;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A single-call capability invoked within one workflow step.
///
/// Implement this trait on your own structs and register them into a
/// [`crate::ToolRegistry`] (usually via [`crate::Engine::register_tool`]).
/// The registry owns the tool for the rest of the process lifetime and
/// validates its parameter schema at registration time.
pub trait Tool: Send + Sync {
    /// A unique name for this tool, used to reference it from steps.
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// A JSON object mapping each parameter name to its schema node.
    ///
    /// The shape is checked with [`crate::validate_definition`] when the
    /// tool is registered; caller input is checked against it with
    /// [`crate::validate_input`] before every invocation.
    fn parameters(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Run the tool against validated parameters.
    ///
    /// An `Err` aborts the whole workflow run; return an in-band value
    /// (see [`crate::error_value`]) for failures downstream steps should
    /// be able to observe and react to.
    fn execute(&self, params: &Value, ctx: &mut Context) -> Result<Value, StepError>;
}

/// Tools resolved for one agent invocation, keyed by tool name.
pub type ToolMap<'a> = HashMap<&'a str, &'a dyn Tool>;

/// A multi-step task handler that may itself call tools while producing
/// one step result.
///
/// The tool names returned by [`tools`](Agent::tools) are resolved against
/// the [`crate::ToolRegistry`] at invocation time, not at registration
/// time, so tools may be registered after the agent.
pub trait Agent: Send + Sync {
    /// A unique name for this agent, used to reference it from steps.
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// A JSON object mapping each parameter name to its schema node.
    fn parameters(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Names of the tools this agent is allowed to call.
    fn tools(&self) -> Vec<String> {
        Vec::new()
    }

    /// Run the agent's task against validated parameters and the resolved
    /// tool map. Names that failed to resolve are absent from the map.
    fn task(&self, params: &Value, ctx: &mut Context, tools: &ToolMap) -> Result<Value, StepError>;
}
