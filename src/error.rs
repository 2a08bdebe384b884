use std::fmt;

/// Error type for tool and agent handler bodies, with variants designed
/// around what the caller can do about them.
#[derive(Debug)]
pub enum StepError {
    /// Bad input or handler logic error. Don't retry, fix the code.
    Invalid(String),
    /// Transient failure (network, rate limit). Retrying might help.
    Transient(String),
    /// Everything else. Inspect the message for details.
    Other(String),
}

impl StepError {
    /// Create an [`Invalid`](StepError::Invalid) error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        StepError::Invalid(msg.into())
    }

    /// Create a [`Transient`](StepError::Transient) error.
    pub fn transient(msg: impl Into<String>) -> Self {
        StepError::Transient(msg.into())
    }

    /// Create an [`Other`](StepError::Other) error.
    pub fn other(msg: impl Into<String>) -> Self {
        StepError::Other(msg.into())
    }
}

impl From<ureq::Error> for StepError {
    fn from(e: ureq::Error) -> Self {
        StepError::Transient(e.to_string())
    }
}

impl From<std::io::Error> for StepError {
    fn from(e: std::io::Error) -> Self {
        StepError::Other(e.to_string())
    }
}

impl From<serde_json::Error> for StepError {
    fn from(e: serde_json::Error) -> Self {
        StepError::Invalid(e.to_string())
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid: {msg}"),
            Self::Transient(msg) => write!(f, "transient: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StepError {}

/// Errors raised by registration and workflow execution.
///
/// Structural problems (bad schema, duplicate name, malformed step) are
/// fail-fast; input-shape problems never appear here, they come back as
/// in-band error values so the rest of the workflow still runs.
#[derive(Debug)]
pub enum EngineError {
    /// A capability's parameter schema is structurally invalid.
    SchemaDefinition {
        capability: String,
        errors: Vec<String>,
    },
    DuplicateTool(String),
    DuplicateAgent(String),
    ToolNotFound(String),
    AgentNotFound(String),
    /// A step declares both a tool and an agent.
    StepConflict(String),
    /// A step declares neither a tool nor an agent.
    UnboundStep(String),
    /// A handler body failed; propagated unmodified from the step.
    Handler { step: String, error: StepError },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaDefinition { capability, errors } => {
                write!(
                    f,
                    "invalid parameter schema for \"{capability}\": {}",
                    errors.join("; ")
                )
            }
            Self::DuplicateTool(name) => write!(f, "tool \"{name}\" already registered"),
            Self::DuplicateAgent(name) => write!(f, "agent \"{name}\" already registered"),
            Self::ToolNotFound(name) => write!(f, "tool \"{name}\" not found"),
            Self::AgentNotFound(name) => write!(f, "agent \"{name}\" not found"),
            Self::StepConflict(step) => {
                write!(f, "step \"{step}\" cannot have both agent and tool defined")
            }
            Self::UnboundStep(step) => {
                write!(f, "step \"{step}\" declares neither a tool nor an agent")
            }
            Self::Handler { step, error } => write!(f, "step \"{step}\" failed: {error}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Handler { error, .. } => Some(error),
            _ => None,
        }
    }
}
