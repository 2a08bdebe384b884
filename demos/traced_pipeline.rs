//! A two-step workflow (tool, then an agent calling that tool) run with
//! the stderr tracing hooks attached.

use serde_json::{Value, json};
use stepline::{Agent, Context, Engine, StepError, Tool, ToolMap, WorkflowConfig};

struct WordCount;

impl Tool for WordCount {
    fn name(&self) -> &str {
        "word_count"
    }

    fn parameters(&self) -> Value {
        json!({ "text": { "type": "string" } })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let text = params["text"]
            .as_str()
            .ok_or_else(|| StepError::invalid("text must be a string"))?;
        Ok(json!({ "words": text.split_whitespace().count() }))
    }
}

struct Summarizer;

impl Agent for Summarizer {
    fn name(&self) -> &str {
        "summarizer"
    }

    fn parameters(&self) -> Value {
        json!({ "text": { "type": "string" } })
    }

    fn tools(&self) -> Vec<String> {
        vec!["word_count".to_string()]
    }

    fn task(&self, params: &Value, ctx: &mut Context, tools: &ToolMap) -> Result<Value, StepError> {
        let counter = tools
            .get("word_count")
            .ok_or_else(|| StepError::other("word_count unavailable"))?;
        let counted = counter.execute(params, ctx)?;
        let words = counted["words"].as_u64().unwrap_or(0);
        let previous = ctx.previous_step_result().cloned().unwrap_or(Value::Null);
        Ok(json!({ "summary": format!("{words} words"), "upstream": previous }))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::new();
    engine.register_tool(WordCount)?;
    engine.register_agent(Summarizer)?;

    let config: WorkflowConfig = serde_json::from_value(json!({
        "name": "summarize",
        "steps": [
            { "name": "count", "tool": "word_count" },
            { "name": "summary", "agent": { "name": "summarizer" } },
        ],
        "globals": { "lang": "en" },
    }))?;

    let result = engine
        .runner()
        .with_tracing()
        .run(&config, &json!({ "text": "a small step for a workflow" }))?;

    println!("{result}");
    Ok(())
}
