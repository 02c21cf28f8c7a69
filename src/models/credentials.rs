pub const DEFAULT_SERVER_URL: &str = "https://rank.modu.dev";

/// Registration data read from the local credentials file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub server_url: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Endpoint receiving session submissions.
    pub fn sessions_url(&self) -> String {
        format!("{}/api/v1/sessions", self.server_url.trim_end_matches('/'))
    }
}
