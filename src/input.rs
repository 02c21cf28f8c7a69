use std::io::Read;

use serde_json::Value;

use crate::models::HookInput;

pub fn read_stdin() -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Parse the host's session-end document.
///
/// Returns `None` for empty input, malformed JSON, or a JSON value that is
/// not an object. None of these are reported.
pub fn parse_hook_input(raw: &[u8]) -> Option<HookInput> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => Some(HookInput::new(map)),
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "hook input is not an object");
            None
        }
        Err(err) => {
            tracing::debug!(error = %err, "hook input is not valid json");
            None
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
