//! Configuration structures for the receipt pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{OcrError, RcptError};

/// Main configuration for the rcpt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RcptConfig {
    /// OCR provider configuration.
    pub vision: VisionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Google Cloud Vision client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// API base URL (without the `/v1/images:annotate` path).
    pub endpoint: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// Vision feature type to request.
    pub feature_type: String,

    /// Language hints passed in the image context.
    pub language_hints: Vec<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://vision.googleapis.com".to_string(),
            api_key_env: "GOOGLE_VISION_API_KEY".to_string(),
            feature_type: "TEXT_DETECTION".to_string(),
            language_hints: vec!["ko".to_string()],
            timeout_secs: 30,
            user_agent: "rcpt/0.1.0".to_string(),
        }
    }
}

impl VisionConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, OcrError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OcrError::MissingApiKey(self.api_key_env.clone()))
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl RcptConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, RcptError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RcptError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), RcptError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
