use crate::config::{StepConfig, WorkflowConfig};
use crate::ctx::Context;
use crate::error::EngineError;
use crate::executor::{run_agent_step, run_tool_step};
use crate::registry::{AgentRegistry, ToolRegistry};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Passed to the `on_step` hook after each completed step.
pub struct StepEvent<'a> {
    pub step: &'a str,
    /// Zero-based position of the step in the workflow.
    pub index: usize,
    pub duration: Duration,
}

/// Passed to the `on_error` hook when a step aborts the run.
pub struct ErrorEvent<'a> {
    pub step: &'a str,
    pub index: usize,
    pub error: &'a EngineError,
}

/// Drives one workflow config through the registries, step by step.
///
/// Steps run strictly in declaration order; each step's writes to the
/// [`Context`] are fully visible to the next. The runner holds only
/// borrowed registries, so several runners can serve one engine; each
/// run still gets its own exclusive context.
pub struct Runner<'e> {
    tools: &'e ToolRegistry,
    agents: &'e AgentRegistry,
    on_step: Option<Box<dyn FnMut(&StepEvent) + 'e>>,
    on_error: Option<Box<dyn FnMut(&ErrorEvent) + 'e>>,
}

impl<'e> Runner<'e> {
    pub fn new(tools: &'e ToolRegistry, agents: &'e AgentRegistry) -> Self {
        Self {
            tools,
            agents,
            on_step: None,
            on_error: None,
        }
    }

    /// Register a callback that fires after each completed step.
    pub fn on_step(mut self, cb: impl FnMut(&StepEvent) + 'e) -> Self {
        self.on_step = Some(Box::new(cb));
        self
    }

    /// Register a callback that fires when a step aborts the run.
    pub fn on_error(mut self, cb: impl FnMut(&ErrorEvent) + 'e) -> Self {
        self.on_error = Some(Box::new(cb));
        self
    }

    /// Set both hooks to print step transitions and errors to stderr.
    pub fn with_tracing(self) -> Self {
        self.on_step(|e| {
            eprintln!(
                "[step {}] {} ({:.3}s)",
                e.index,
                e.step,
                e.duration.as_secs_f64()
            );
        })
        .on_error(|e| {
            eprintln!("[error] {} at step {}: {}", e.step, e.index, e.error);
        })
    }

    /// Run every step of `config` against `params`, returning the final
    /// step's result (`Value::Null` for an empty workflow).
    ///
    /// Each step's result is stored in the context under the step's name
    /// (later steps with the same name overwrite) and becomes the
    /// previous-step result for the next step. An error-shaped result
    /// does not halt the run; only an `Err` does. The engine applies no
    /// timeout; bound the call externally if needed.
    pub fn run(&mut self, config: &WorkflowConfig, params: &Value) -> Result<Value, EngineError> {
        let mut ctx = Context::new();
        ctx.set_globals(config.globals.clone());

        for (index, step) in config.steps.iter().enumerate() {
            let start = Instant::now();

            let result = self.dispatch(step, params, &mut ctx);
            let duration = start.elapsed();

            match result {
                Err(error) => {
                    if let Some(cb) = &mut self.on_error {
                        cb(&ErrorEvent {
                            step: &step.name,
                            index,
                            error: &error,
                        });
                    }
                    return Err(error);
                }
                Ok(value) => {
                    if let Some(cb) = &mut self.on_step {
                        cb(&StepEvent {
                            step: &step.name,
                            index,
                            duration,
                        });
                    }
                    ctx.set(step.name.clone(), value.clone());
                    ctx.set_previous_step_result(value);
                }
            }
        }

        Ok(ctx.previous_step_result().cloned().unwrap_or(Value::Null))
    }

    fn dispatch(
        &self,
        step: &StepConfig,
        params: &Value,
        ctx: &mut Context,
    ) -> Result<Value, EngineError> {
        match (&step.tool, &step.agent) {
            (Some(_), Some(_)) => Err(EngineError::StepConflict(step.name.clone())),
            (None, None) => Err(EngineError::UnboundStep(step.name.clone())),
            (Some(tool), None) => run_tool_step(self.tools, &step.name, tool, params, ctx),
            (None, Some(agent_ref)) => {
                run_agent_step(self.tools, self.agents, &step.name, agent_ref, params, ctx)
            }
        }
    }
}
