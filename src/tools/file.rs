use crate::capability::Tool;
use crate::ctx::Context;
use crate::error::StepError;
use serde_json::{Value, json};

/// Read a file into `{"content": <string>}`.
pub struct ReadFile;

impl Tool for ReadFile {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read a UTF-8 file from disk"
    }

    fn parameters(&self) -> Value {
        json!({
            "path": { "type": "string", "description": "Path to the file" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let path = params["path"]
            .as_str()
            .ok_or_else(|| StepError::invalid("path must be a string"))?;
        let content = std::fs::read_to_string(path)?;
        Ok(json!({ "content": content }))
    }
}

/// Write a file, creating parent directories as needed. Returns
/// `{"path", "bytes"}`.
pub struct WriteFile;

impl Tool for WriteFile {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Write a UTF-8 file to disk, creating parent directories"
    }

    fn parameters(&self) -> Value {
        json!({
            "path": { "type": "string", "description": "Path to the file" },
            "content": { "type": "string", "description": "File content" },
        })
    }

    fn execute(&self, params: &Value, _ctx: &mut Context) -> Result<Value, StepError> {
        let path = params["path"]
            .as_str()
            .ok_or_else(|| StepError::invalid("path must be a string"))?;
        let content = params["content"]
            .as_str()
            .ok_or_else(|| StepError::invalid("content must be a string"))?;

        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(json!({ "path": path, "bytes": content.len() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_are_well_formed() {
        assert!(crate::schema::validate_definition(&ReadFile.parameters()).is_empty());
        assert!(crate::schema::validate_definition(&WriteFile.parameters()).is_empty());
    }

    #[test]
    fn write_then_read_round_trip() {
        let dir = std::env::temp_dir().join("stepline_file_tool_test");
        let path = dir.join("nested").join("note.txt");
        let path_str = path.display().to_string();
        let mut ctx = Context::new();

        let written = WriteFile
            .execute(
                &json!({ "path": path_str, "content": "hello from a step" }),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(written["bytes"], json!("hello from a step".len()));

        let read = ReadFile
            .execute(&json!({ "path": path_str }), &mut ctx)
            .unwrap();
        assert_eq!(read["content"], json!("hello from a step"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_missing_file_errors() {
        let mut ctx = Context::new();
        let result = ReadFile.execute(
            &json!({ "path": "/nonexistent_dir_xyz_abc/nope.txt" }),
            &mut ctx,
        );
        assert!(result.is_err());
    }
}
