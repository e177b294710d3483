use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CONFIG_FILE: &str = "resync.json";

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    /// Flags win over the config file, which wins over defaults. An explicit
    /// `config_path` must exist; the default file is only read when present.
    pub fn resolve(
        config_path: Option<&Path>,
        url: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let mut cfg = match config_path {
            Some(p) => Self::load(p)?,
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if p.is_file() {
                    Self::load(&p)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(url) = url {
            cfg.base_url = url;
        }
        if token.is_some() {
            cfg.token = token;
        }
        if cfg.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
