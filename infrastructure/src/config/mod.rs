//! Configuration file loading for trivia-judge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIVIA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. Global: `$XDG_CONFIG_HOME/trivia-judge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_CATALOG_PATH, FileCatalogConfig, FileConfig, FileJudgeConfig, FileOutputConfig,
    JudgeConfigError,
};
pub use loader::ConfigLoader;
