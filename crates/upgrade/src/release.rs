//! Remote release descriptor fetching.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Latest-release endpoint of the plugin's public repository.
pub const DEFAULT_RELEASE_ENDPOINT: &str =
    "https://api.github.com/repos/veneer-desk/veneer/releases/latest";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "veneer-desk-plugin";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Release descriptor as published by the remote index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub published_at: String,
}

/// Source of the latest release descriptor.
///
/// `None` means the source could not be reached or did not answer with a
/// usable descriptor; the failure is logged at the source, not surfaced.
/// One attempt per invocation; retrying is the caller's decision.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn latest(&self) -> Option<ReleaseInfo>;
}

/// Fetches the descriptor with a single bounded-timeout GET.
pub struct HttpReleaseSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReleaseSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpReleaseSource {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_ENDPOINT)
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    async fn latest(&self) -> Option<ReleaseInfo> {
        let response = match self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "release fetch failed");
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(endpoint = %self.endpoint, %status, "release index returned non-200 status");
            return None;
        }

        match response.json::<ReleaseInfo>().await {
            Ok(release) => Some(release),
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "release descriptor did not parse");
                None
            }
        }
    }
}
