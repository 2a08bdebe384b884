//! Name-keyed stores of registered capabilities.
//!
//! Registries are append-only for the process lifetime: no unregister, no
//! update. Registration validates the capability's parameter schema and
//! rejects duplicates; a failed registration never corrupts the store.
//! Registration should be serialized before serving traffic; lookups are
//! safe to share once loading is done.

use crate::capability::{Agent, Tool};
use crate::error::EngineError;
use crate::schema::validate_definition;
use std::collections::HashMap;

pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), EngineError> {
        let errors = validate_definition(&tool.parameters());
        if !errors.is_empty() {
            return Err(EngineError::SchemaDefinition {
                capability: tool.name().to_string(),
                errors,
            });
        }
        if self.tools.contains_key(tool.name()) {
            return Err(EngineError::DuplicateTool(tool.name().to_string()));
        }
        self.tools.insert(tool.name().to_string(), tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Tool, EngineError> {
        self.tools
            .get(name)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| EngineError::ToolNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AgentRegistry {
    agents: HashMap<String, Box<dyn Agent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    pub fn register(&mut self, agent: Box<dyn Agent>) -> Result<(), EngineError> {
        let errors = validate_definition(&agent.parameters());
        if !errors.is_empty() {
            return Err(EngineError::SchemaDefinition {
                capability: agent.name().to_string(),
                errors,
            });
        }
        if self.agents.contains_key(agent.name()) {
            return Err(EngineError::DuplicateAgent(agent.name().to_string()));
        }
        self.agents.insert(agent.name().to_string(), agent);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Agent, EngineError> {
        self.agents
            .get(name)
            .map(|agent| agent.as_ref())
            .ok_or_else(|| EngineError::AgentNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
