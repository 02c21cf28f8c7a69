use serde::Serialize;

/// Canonical record sent to the rank service.
///
/// Field declaration order is the wire order (alphabetical); the signature
/// covers the serialized bytes, so do not reorder.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionPayload {
    pub cache_creation_tokens: i64,
    pub cache_read_tokens: i64,
    pub ended_at: String,
    pub input_tokens: i64,
    pub model_name: String,
    pub output_tokens: i64,
    pub session_id: String,
    pub started_at: String,
}

/// A serialized payload together with its authentication headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub body: String,
    pub timestamp: String,
    pub signature: String,
}
