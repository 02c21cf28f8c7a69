use serde_json::{Map, Value};

/// Raw session-end document written by the host on stdin.
///
/// Kept as an untyped object: the host has shipped both snake_case and
/// camelCase field names, so typed deserialization happens in `normalize`.
#[derive(Debug, Clone, Default)]
pub struct HookInput {
    fields: Map<String, Value>,
}

impl HookInput {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Value stored under `key`, treating JSON `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// First non-empty string among `keys`.
    pub fn get_string_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.get(k).and_then(|v| v.as_str()))
            .find(|s| !s.is_empty())
    }

    /// Project directory the session ran in (`projectPath`, then `cwd`).
    pub fn project_path(&self) -> Option<&str> {
        self.get_string_any(&["projectPath", "cwd"])
    }
}

impl From<Map<String, Value>> for HookInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
