//! AI judge configuration from TOML (`[judge]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors reading the judge credential
#[derive(Error, Debug)]
pub enum JudgeConfigError {
    #[error("Failed to read API key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// OpenAI-compatible judge settings.
///
/// The credential is looked up in this order, first non-empty value wins:
/// `api_key`, the environment variable named by `api_key_env`, the contents
/// of `api_key_file`. No value means the judge is unconfigured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    /// Set to false to force exact-match grading even with a key present.
    pub enabled: bool,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// File holding the API key on its first line.
    pub api_key_file: Option<PathBuf>,
    /// Base URL for the API (can point at any OpenAI-compatible server).
    pub base_url: String,
    /// Chat model used as judge.
    pub model: String,
    /// Sampling temperature; low for consistent judgments.
    pub temperature: f32,
    /// Max tokens per judge response.
    pub max_tokens: u32,
    /// Upper bound on one judge call, in seconds.
    pub timeout_secs: f64,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key_file: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4".to_string(),
            temperature: 0.1,
            max_tokens: 200,
            timeout_secs: 30.0,
        }
    }
}

impl FileJudgeConfig {
    /// Judge call timeout; falls back to the default for unusable values.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(trivia_application::config::DEFAULT_JUDGE_TIMEOUT)
    }

    /// Resolve the credential from the configured sources.
    ///
    /// Returns `Ok(None)` when the judge is disabled or no source yields a
    /// non-empty key. A configured key file that cannot be read is an error.
    pub fn resolve_api_key(&self) -> Result<Option<String>, JudgeConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(
        &self,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<String>, JudgeConfigError> {
        if !self.enabled {
            debug!("AI judge disabled by configuration");
            return Ok(None);
        }

        if let Some(key) = non_empty(self.api_key.as_deref()) {
            debug!("Using API key from configuration");
            return Ok(Some(key));
        }

        if !self.api_key_env.is_empty()
            && let Some(key) = non_empty(lookup_env(&self.api_key_env).as_deref())
        {
            debug!("Using API key from ${}", self.api_key_env);
            return Ok(Some(key));
        }

        if let Some(path) = &self.api_key_file {
            let key = read_key_file(path)?;
            if key.is_some() {
                debug!("Using API key from {}", path.display());
            }
            return Ok(key);
        }

        Ok(None)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn read_key_file(path: &Path) -> Result<Option<String>, JudgeConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| JudgeConfigError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(non_empty(content.lines().next()))
}
