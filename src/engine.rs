use crate::capability::{Agent, Tool};
use crate::config::WorkflowConfig;
use crate::error::EngineError;
use crate::registry::{AgentRegistry, ToolRegistry};
use crate::runner::Runner;
use serde_json::Value;

/// One engine instance per process (or per test): owns both registries
/// and exposes the registration and execution surface the embedding
/// application drives.
///
/// Registration is expected to be serialized during a load phase before
/// workflows execute; after that, `&Engine` lookups are read-only and
/// safe to share.
pub struct Engine {
    tools: ToolRegistry,
    agents: AgentRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            tools: ToolRegistry::new(),
            agents: AgentRegistry::new(),
        }
    }

    /// Register a tool, validating its parameter schema first.
    pub fn register_tool(&mut self, tool: impl Tool + 'static) -> Result<(), EngineError> {
        self.tools.register(Box::new(tool))
    }

    /// Register an agent, validating its parameter schema first.
    pub fn register_agent(&mut self, agent: impl Agent + 'static) -> Result<(), EngineError> {
        self.agents.register(Box::new(agent))
    }

    pub fn tool(&self, name: &str) -> Result<&dyn Tool, EngineError> {
        self.tools.get(name)
    }

    pub fn agent(&self, name: &str) -> Result<&dyn Agent, EngineError> {
        self.agents.get(name)
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    /// A runner borrowing this engine's registries; attach hooks before
    /// calling [`Runner::run`].
    pub fn runner(&self) -> Runner<'_> {
        Runner::new(&self.tools, &self.agents)
    }

    /// Run a workflow config against caller parameters and return the
    /// final step's result.
    pub fn run_workflow(
        &self,
        config: &WorkflowConfig,
        params: &Value,
    ) -> Result<Value, EngineError> {
        self.runner().run(config, params)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
