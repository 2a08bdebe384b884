use serde_json::{Map, Value};
use std::collections::HashMap;

/// Execution context threaded through all steps of one workflow run.
///
/// Created fresh per run and exclusively owned by it: the runner stores
/// each step's result under the step's name and keeps the most recent
/// result in a separate slot, so earlier results stay reachable by name
/// while `previous_step_result` always reflects the last completed step.
pub struct Context {
    store: HashMap<String, Value>,
    previous: Option<Value>,
    globals: Option<Value>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            previous: None,
            globals: None,
        }
    }

    /// Create a context pre-populated with initial entries.
    pub fn with_values(initial: HashMap<String, Value>) -> Self {
        Self {
            store: initial,
            previous: None,
            globals: None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.store.insert(key.into(), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Shallow-merge `data` into the store, overwriting existing keys.
    pub fn merge(&mut self, data: Map<String, Value>) {
        for (key, value) in data {
            self.store.insert(key, value);
        }
    }

    /// A shallow copy of the full store.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.store.clone()
    }

    /// The result of the most recently completed step, if any step has
    /// completed yet.
    pub fn previous_step_result(&self) -> Option<&Value> {
        self.previous.as_ref()
    }

    pub fn set_previous_step_result(&mut self, result: Value) {
        self.previous = Some(result);
    }

    /// The workflow-level globals declared by the running config.
    pub fn globals(&self) -> Option<&Value> {
        self.globals.as_ref()
    }

    pub fn set_globals(&mut self, globals: Option<Value>) {
        self.globals = globals;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_has() {
        let mut ctx = Context::new();
        assert!(!ctx.has("k"));
        ctx.set("k", json!(1));
        assert!(ctx.has("k"));
        assert_eq!(ctx.get("k"), Some(&json!(1)));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let mut ctx = Context::new();
        ctx.set("k", json!("old"));
        ctx.set("k", json!("new"));
        assert_eq!(ctx.get("k"), Some(&json!("new")));
    }

    #[test]
    fn merge_shallow_overwrites() {
        let mut ctx = Context::new();
        ctx.set("a", json!(1));
        ctx.set("b", json!(2));

        let patch = json!({ "b": 20, "c": 30 });
        ctx.merge(patch.as_object().cloned().unwrap_or_default());

        assert_eq!(ctx.get("a"), Some(&json!(1)));
        assert_eq!(ctx.get("b"), Some(&json!(20)));
        assert_eq!(ctx.get("c"), Some(&json!(30)));
    }

    #[test]
    fn snapshot_is_independent_copy() {
        let mut ctx = Context::new();
        ctx.set("a", json!(1));
        let snap = ctx.snapshot();
        ctx.set("a", json!(2));
        assert_eq!(snap.get("a"), Some(&json!(1)));
    }

    #[test]
    fn previous_step_result_starts_empty() {
        let mut ctx = Context::new();
        assert!(ctx.previous_step_result().is_none());
        ctx.set_previous_step_result(json!({ "ok": true }));
        assert_eq!(ctx.previous_step_result(), Some(&json!({ "ok": true })));
    }

    #[test]
    fn globals_round_trip() {
        let mut ctx = Context::new();
        assert!(ctx.globals().is_none());
        ctx.set_globals(Some(json!({ "env": "test" })));
        assert_eq!(ctx.globals(), Some(&json!({ "env": "test" })));
    }

    #[test]
    fn with_values_pre_populates_store() {
        let mut initial = HashMap::new();
        initial.insert("seed".to_string(), json!(42));
        let ctx = Context::with_values(initial);
        assert_eq!(ctx.get("seed"), Some(&json!(42)));
    }
}
