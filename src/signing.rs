use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::HookError;
use crate::models::{SessionPayload, SignedRequest};

type HmacSha256 = Hmac<Sha256>;

/// Hex HMAC-SHA256 of `"<timestamp>:<body>"` keyed by `api_key`.
pub fn compute_signature(api_key: &str, timestamp: &str, body: &str) -> Result<String, HookError> {
    let mut mac = HmacSha256::new_from_slice(api_key.as_bytes())
        .map_err(|err| HookError::SigningKey(err.to_string()))?;
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Serialize `payload` once and sign those exact bytes.
pub fn sign_payload(
    payload: &SessionPayload,
    api_key: &str,
    unix_ts: i64,
) -> Result<SignedRequest, HookError> {
    let body = serde_json::to_string(payload)?;
    let timestamp = unix_ts.to_string();
    let signature = compute_signature(api_key, &timestamp, &body)?;
    Ok(SignedRequest {
        body,
        timestamp,
        signature,
    })
}
