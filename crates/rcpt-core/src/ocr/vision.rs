//! Google Cloud Vision `images:annotate` client.

use std::future::Future;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::{RecognitionResult, TextRecognizer};
use crate::error::OcrError;
use crate::models::config::VisionConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Vision text detection endpoint.
///
/// One request per image. The key travels in the `x-goog-api-key` header,
/// never in the URL, and transport errors are stripped of their URL.
#[derive(Debug, Clone)]
pub struct VisionClient {
    client: Client,
    annotate_url: String,
    api_key: String,
    feature_type: String,
    language_hints: Vec<String>,
}

impl VisionClient {
    /// Create a client from configuration and an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &VisionConfig, api_key: impl Into<String>) -> Result<Self, OcrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            annotate_url: format!("{}/v1/images:annotate", config.endpoint.trim_end_matches('/')),
            api_key: api_key.into(),
            feature_type: config.feature_type.clone(),
            language_hints: config.language_hints.clone(),
        })
    }

    /// Create a client reading the API key from the configured environment variable.
    pub fn from_config(config: &VisionConfig) -> Result<Self, OcrError> {
        let api_key = config.api_key()?;
        Self::new(config, api_key)
    }

    fn request_body(&self, image: &[u8]) -> Value {
        let mut request = json!({
            "image": { "content": STANDARD.encode(image) },
            "features": [{ "type": self.feature_type }],
        });

        if !self.language_hints.is_empty() {
            request["imageContext"] = json!({ "languageHints": self.language_hints });
        }

        json!({ "requests": [request] })
    }

    async fn annotate(&self, body: Value) -> Result<RecognitionResult, OcrError> {
        debug!("POST {}", self.annotate_url);

        let response = self
            .client
            .post(&self.annotate_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Vision API returned {}", status);
            return Err(OcrError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| OcrError::Http(e.without_url()))?;
        let result = RecognitionResult::from_json(&text)?;

        if let Some(message) = result.provider_error() {
            warn!("Vision API reported an image error: {}", message);
        }
        info!(
            "Vision API returned {} annotations",
            result.annotations().len()
        );

        Ok(result)
    }
}

impl TextRecognizer for VisionClient {
    fn recognize(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<RecognitionResult, OcrError>> + Send {
        let body = self.request_body(image);
        self.annotate(body)
    }
}
