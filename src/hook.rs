//! # Hook Pipeline
//!
//! input -> credentials -> exclusion -> normalize -> sign -> submit.
//! Each stage either continues or stops silently (`None`); only a corrupt
//! token count aborts the run with an error.

use chrono::{DateTime, Utc};

use crate::config::{CredentialsSource, load_credentials};
use crate::error::HookError;
use crate::exclusion::{ExclusionPolicy, ProjectExclusions};
use crate::input::parse_hook_input;
use crate::models::SubmissionResult;
use crate::normalize::normalize;
use crate::signing::sign_payload;
use crate::submit::RankClient;

pub struct SessionHook<'a> {
    credentials: &'a dyn CredentialsSource,
    exclusions: Box<dyn ExclusionPolicy + 'a>,
    client: RankClient,
    server_url: Option<String>,
}

impl<'a> SessionHook<'a> {
    pub fn new(credentials: &'a dyn CredentialsSource, client: RankClient) -> Self {
        Self {
            credentials,
            exclusions: Box::new(ProjectExclusions::default()),
            client,
            server_url: None,
        }
    }

    /// Skip projects this policy rejects. Defaults to submitting everything.
    pub fn with_exclusions(mut self, policy: impl ExclusionPolicy + 'a) -> Self {
        self.exclusions = Box::new(policy);
        self
    }

    /// Send to this base URL regardless of the credentials file.
    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        self.server_url = server_url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Run the pipeline over one raw stdin document.
    ///
    /// `Ok(None)` means a stage decided there is nothing to submit.
    pub fn run(
        &self,
        raw: &[u8],
        now: DateTime<Utc>,
    ) -> Result<Option<SubmissionResult>, HookError> {
        let Some(input) = parse_hook_input(raw) else {
            return Ok(None);
        };
        let Some(mut credentials) = load_credentials(self.credentials) else {
            return Ok(None);
        };
        if let Some(url) = &self.server_url {
            credentials.server_url = url.clone();
        }

        if self.exclusions.is_excluded(input.project_path()) {
            tracing::debug!(project = ?input.project_path(), "project excluded");
            return Ok(None);
        }

        let payload = normalize(&input, now)?;
        let signed = sign_payload(&payload, &credentials.api_key, now.timestamp())?;
        Ok(Some(self.client.submit(&credentials, &signed)))
    }
}

/// Line to print on stderr for a submission outcome, if any.
pub fn status_line(result: &SubmissionResult) -> Option<String> {
    if result.success {
        Some(result.message.clone())
    } else if result.message.is_empty() {
        None
    } else {
        Some(format!("Modu Rank: {}", result.message))
    }
}

/// Line to print on stderr when the run aborts.
pub fn error_line(err: &dyn std::fmt::Display) -> String {
    format!("Modu Rank hook error: {err}")
}
