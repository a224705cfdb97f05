use anyhow::{bail, Result};
use std::env;

pub const SERVER_URL_ENV: &str = "ASK_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            bail!("server URL must not be empty");
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            bail!("server URL must start with http:// or https://, got {}", trimmed);
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Reads `ASK_SERVER_URL`, falling back to the local dev server.
    pub fn from_env() -> Result<Self> {
        let url = env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(&url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
