//! Configuration shapes shared with the embedding application.
//!
//! These serde types are the boundary with the excluded loaders and route
//! layer: a YAML/JSON loader deserializes into them and hands them to the
//! runner; the engine itself never reads files or HTTP requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered sequence of steps run against one shared [`crate::Context`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
    /// Workflow-level values made available to every step via
    /// [`crate::Context::globals`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<Value>,
    /// Opaque to the engine; consumed by the embedding route layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpBinding>,
}

/// One workflow unit bound to exactly one tool or one agent.
///
/// Declaring both is a configuration error the runner rejects before
/// invoking any handler; declaring neither is rejected the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentRef>,
}

/// A step's reference to a registered agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRef {
    pub name: String,
    /// When present, overrides the agent's own declared tool list for
    /// this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

/// HTTP exposure for a workflow or chat; opaque to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub path: String,
}

/// Configuration for a chat endpoint.
///
/// Chats are run by a separate runner outside this crate; the shape lives
/// here because loaders parse workflows and chats from the same files and
/// chats reuse the tool registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the chat client handler to dispatch to.
    pub client: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpBinding>,
}
