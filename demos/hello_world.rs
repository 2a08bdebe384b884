use serde_json::{Value, json};
use stepline::{Context, Engine, StepError, Tool, WorkflowConfig};

struct Greet;

impl Tool for Greet {
    fn name(&self) -> &str {
        "greet"
    }

    fn description(&self) -> &str {
        "Greets someone by name"
    }

    fn parameters(&self) -> Value {
        json!({ "name": { "type": "string" } })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let name = params["name"].as_str().unwrap_or("world");
        Ok(json!({ "greeting": format!("hello, {name}") }))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::new();
    engine.register_tool(Greet)?;

    let config: WorkflowConfig = serde_json::from_value(json!({
        "name": "hello",
        "steps": [{ "name": "s1", "tool": "greet" }],
    }))?;

    let result = engine.run_workflow(&config, &json!({ "name": "ada" }))?;
    println!("{result}");
    Ok(())
}
