//! A batteries-included Rust library for schema-validated tools, agents,
//! and sequential workflows.
//!
//! Declare named tools (single-call capabilities) and agents (task
//! handlers that may themselves call tools), register them into an
//! [`Engine`], and execute workflow configs against caller parameters.
//! Steps share one mutable [`Context`] per run: each step's result is
//! stored under the step's name and handed to the next step as the
//! previous result.
//!
//! Input is validated against each capability's declared parameter
//! schema before its handler runs; a failed validation becomes an
//! in-band `{"error": ...}` step result (see [`error_value`]) and the
//! workflow keeps going, while configuration mistakes and handler
//! errors abort the run.
//!
//! # Quick start
//!
//! ```rust
//! use serde_json::{Value, json};
//! use stepline::{Context, Engine, StepError, Tool, WorkflowConfig};
//!
//! struct Greet;
//!
//! impl Tool for Greet {
//!     fn name(&self) -> &str { "greet" }
//!     fn parameters(&self) -> Value {
//!         json!({ "name": { "type": "string" } })
//!     }
//!     fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
//!         let name = params["name"].as_str().unwrap_or("world");
//!         Ok(json!({ "greeting": format!("hello, {name}") }))
//!     }
//! }
//!
//! let mut engine = Engine::new();
//! engine.register_tool(Greet).unwrap();
//!
//! let config: WorkflowConfig = serde_json::from_value(json!({
//!     "name": "hello",
//!     "steps": [{ "name": "s1", "tool": "greet" }],
//! })).unwrap();
//!
//! let result = engine.run_workflow(&config, &json!({ "name": "ada" })).unwrap();
//! assert_eq!(result["greeting"], "hello, ada");
//! ```

mod capability;
mod config;
mod ctx;
mod engine;
mod error;
mod executor;
mod registry;
mod runner;
mod schema;
pub mod tools;
mod validate;

pub use capability::{Agent, Tool, ToolMap};
pub use config::{AgentRef, ChatConfig, HttpBinding, StepConfig, WorkflowConfig};
pub use ctx::Context;
pub use engine::Engine;
pub use error::{EngineError, StepError};
pub use executor::{error_value, is_error_value};
pub use registry::{AgentRegistry, ToolRegistry};
pub use runner::{ErrorEvent, Runner, StepEvent};
pub use schema::validate_definition;
pub use validate::{Validation, validate_input};
