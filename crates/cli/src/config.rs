use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use veneer_upgrade::DEFAULT_RELEASE_ENDPOINT;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub release_endpoint: String,
    #[serde(default = "default_user")]
    pub user: String,
}

fn default_endpoint() -> String {
    DEFAULT_RELEASE_ENDPOINT.to_string()
}

fn default_user() -> String {
    "Administrator".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_endpoint: default_endpoint(),
            user: default_user(),
        }
    }
}

impl Config {
    /// Load the config file, writing the defaults on first run.
    pub async fn load(path: &Path) -> Result<Self> {
        match fs::read(path).await {
            Ok(body) => Ok(serde_json::from_slice(&body)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, writing defaults");
                let config = Self::default();
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(path, serde_json::to_vec_pretty(&config)?).await?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }
}
