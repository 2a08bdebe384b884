use std::process::Command;

use crate::capability::Tool;
use crate::ctx::Context;
use crate::error::StepError;
use serde_json::{Value, json};

/// Run a shell command via `sh -c` and return
/// `{"success", "stdout", "stderr"}`.
pub struct RunCommand;

impl Tool for RunCommand {
    fn name(&self) -> &str {
        "run_command"
    }

    fn description(&self) -> &str {
        "Run a shell command and capture its output"
    }

    fn parameters(&self) -> Value {
        json!({
            "command": { "type": "string", "description": "Command line passed to sh -c" },
            "dir": { "type": "string", "nullable": true, "description": "Working directory" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let command = params["command"]
            .as_str()
            .ok_or_else(|| StepError::invalid("command must be a string"))?;

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        if let Some(dir) = params["dir"].as_str() {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;

        Ok(json!({
            "success": output.status.success(),
            "stdout": String::from_utf8_lossy(&output.stdout),
            "stderr": String::from_utf8_lossy(&output.stderr),
        }))
    }
}
