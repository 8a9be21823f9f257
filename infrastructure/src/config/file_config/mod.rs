//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod judge;
mod output;

pub use catalog::{DEFAULT_CATALOG_PATH, FileCatalogConfig};
pub use judge::{FileJudgeConfig, JudgeConfigError};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use trivia_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question bank settings
    pub catalog: FileCatalogConfig,
    /// AI judge settings
    pub judge: FileJudgeConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let judge = &self.judge;

        if !(judge.timeout_secs > 0.0 && Duration::try_from_secs_f64(judge.timeout_secs).is_ok()) {
            issues.push(ConfigIssue::out_of_range(
                "judge.timeout_secs",
                judge.timeout_secs,
                format!(
                    "judge.timeout_secs must be a positive number of seconds, got {}",
                    judge.timeout_secs
                ),
            ));
        }

        if !(0.0..=2.0).contains(&judge.temperature) {
            issues.push(ConfigIssue::out_of_range(
                "judge.temperature",
                judge.temperature,
                format!(
                    "judge.temperature must be between 0 and 2, got {}",
                    judge.temperature
                ),
            ));
        }

        if judge.max_tokens == 0 {
            issues.push(ConfigIssue::out_of_range(
                "judge.max_tokens",
                judge.max_tokens,
                "judge.max_tokens must be greater than 0",
            ));
        }

        if judge.enabled
            && judge.api_key.is_none()
            && judge.api_key_env.trim().is_empty()
            && judge.api_key_file.is_none()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingCredentialSource,
                message: "judge is enabled but api_key, api_key_env and api_key_file are all unset; answers will be graded by exact match".to_string(),
            });
        }

        issues
    }
}
