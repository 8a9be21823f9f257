//! Output format value object

use serde::{Deserialize, Serialize};

/// How a verification result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable verdict (default)
    #[default]
    Text,
    /// JSON object
    Json,
}
