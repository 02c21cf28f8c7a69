use thiserror::Error;

/// Failures that abort one hook run.
///
/// Submission problems are not errors; they are reported through
/// [`crate::models::SubmissionResult`].
#[derive(Error, Debug)]
pub enum HookError {
    #[error("invalid token count for {field}: {value}")]
    InvalidTokenCount { field: &'static str, value: String },
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Surfaced from `Mac::new_from_slice`. HMAC accepts keys of any length
    /// (long keys are hashed first), so this is not produced in practice.
    #[error("invalid signing key: {0}")]
    SigningKey(String),
}
