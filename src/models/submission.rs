use serde_json::Value;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
