//! # Submission Client
//!
//! Single-attempt POST of a signed session payload to the rank service.
//! Every outcome, including transport failures, is folded into a
//! [`SubmissionResult`]; nothing here retries.

use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::models::{Credentials, SignedRequest, SubmissionResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const SUCCESS_MESSAGE: &str = "Session submitted to Modu Rank";

const USER_AGENT: &str = concat!("modu-rank-hook/", env!("CARGO_PKG_VERSION"));
const HEADER_API_KEY: &str = "X-API-Key";
const HEADER_TIMESTAMP: &str = "X-Timestamp";
const HEADER_SIGNATURE: &str = "X-Signature";

pub struct RankClient {
    agent: Agent,
}

impl RankClient {
    pub fn new(timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    /// POST `request.body` verbatim to `<server_url>/api/v1/sessions`.
    pub fn submit(&self, credentials: &Credentials, request: &SignedRequest) -> SubmissionResult {
        let url = credentials.sessions_url();
        tracing::debug!(%url, timestamp = %request.timestamp, "submitting session");

        let sent = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .header(HEADER_API_KEY, credentials.api_key.as_str())
            .header(HEADER_TIMESTAMP, request.timestamp.as_str())
            .header(HEADER_SIGNATURE, request.signature.as_str())
            .send(request.body.as_bytes());

        let mut response = match sent {
            Ok(response) => response,
            Err(err) => return transport_failure(&err),
        };

        let status = response.status();
        let text = response.body_mut().read_to_string();
        tracing::debug!(status = status.as_u16(), "rank service responded");

        if status.is_success() {
            let parsed = text
                .map_err(|err| err.to_string())
                .and_then(|t| serde_json::from_str::<Value>(&t).map_err(|err| err.to_string()));
            return match parsed {
                Ok(data) => SubmissionResult::success(SUCCESS_MESSAGE, data),
                Err(message) => SubmissionResult::failure(message),
            };
        }

        let detail = text
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        SubmissionResult::failure(format!("HTTP {}: {}", status.as_u16(), detail))
    }
}

impl Default for RankClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

fn transport_failure(err: &ureq::Error) -> SubmissionResult {
    match err {
        ureq::Error::Timeout(_)
        | ureq::Error::HostNotFound
        | ureq::Error::ConnectionFailed
        | ureq::Error::Io(_) => SubmissionResult::failure(format!("Connection error: {err}")),
        other => SubmissionResult::failure(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn signed() -> SignedRequest {
        SignedRequest {
            body: r#"{"session_id":"s1"}"#.to_string(),
            timestamp: "1700000000".to_string(),
            signature: "ab".repeat(32),
        }
    }

    #[test]
    fn success_carries_response_data() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/sessions")
                .header("content-type", "application/json")
                .header("x-api-key", "secret")
                .header("x-timestamp", "1700000000")
                .header("x-signature", "ab".repeat(32))
                .body(r#"{"session_id":"s1"}"#);
            then.status(200).json_body(json!({"id": "abc"}));
        });

        let creds = Credentials::new("secret").with_server_url(server.base_url());
        let result = RankClient::default().submit(&creds, &signed());

        mock.assert();
        assert!(result.success);
        assert_eq!(result.message, SUCCESS_MESSAGE);
        assert_eq!(result.data, Some(json!({"id": "abc"})));
    }

    #[test]
    fn error_status_reports_code_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(401).body("invalid api key");
        });

        let creds = Credentials::new("secret").with_server_url(server.base_url());
        let result = RankClient::default().submit(&creds, &signed());

        assert!(!result.success);
        assert_eq!(result.message, "HTTP 401: invalid api key");
        assert!(result.data.is_none());
    }

    #[test]
    fn empty_error_body_uses_reason_phrase() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(503);
        });

        let creds = Credentials::new("secret").with_server_url(server.base_url());
        let result = RankClient::default().submit(&creds, &signed());

        assert!(!result.success);
        assert_eq!(result.message, "HTTP 503: Service Unavailable");
    }

    #[test]
    fn non_json_success_body_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(200).body("ok");
        });

        let creds = Credentials::new("secret").with_server_url(server.base_url());
        let result = RankClient::default().submit(&creds, &signed());

        assert!(!result.success);
        assert!(!result.message.is_empty());
    }

    #[test]
    fn unreachable_server_is_a_connection_error() {
        // port 9 (discard) on localhost is closed in test environments
        let creds = Credentials::new("secret").with_server_url("http://127.0.0.1:9");
        let result = RankClient::new(Duration::from_secs(2)).submit(&creds, &signed());

        assert!(!result.success);
        assert!(
            result.message.starts_with("Connection error"),
            "unexpected message: {}",
            result.message
        );
    }
}
