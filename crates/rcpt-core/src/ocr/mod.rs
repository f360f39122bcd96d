//! OCR provider boundary.
//!
//! Recognition is an external service. This module holds the shape of its
//! response, the adapter that pulls the transcript out of it, and the
//! [`TextRecognizer`] capability the scan pipeline is generic over.

#[cfg(feature = "vision")]
mod vision;

#[cfg(feature = "vision")]
pub use vision::VisionClient;

use std::future::Future;

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::OcrError;

/// A vertex of an annotation bounding polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// Bounding polygon of a detected text region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingPoly {
    pub vertices: Vec<Vertex>,
}

/// One detected text region.
///
/// The first annotation of a response carries the whole document
/// transcript; the rest are individual words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextAnnotation {
    /// Recognized text.
    pub description: String,

    /// Detected language, when the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Region coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
}

/// Raw recognition response for one image.
///
/// Kept as untyped JSON: a response that does not have the expected shape
/// is read as "no text", never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecognitionResult {
    raw: Value,
}

impl RecognitionResult {
    /// Wrap an already decoded provider payload.
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Decode a provider payload from JSON text.
    pub fn from_json(json: &str) -> Result<Self, OcrError> {
        serde_json::from_str(json)
            .map(Self::from_value)
            .map_err(|e| OcrError::Decode(e.to_string()))
    }

    /// A response with no detected text.
    pub fn empty() -> Self {
        Self::from_value(serde_json::json!({ "responses": [{}] }))
    }

    /// Build a response whose single annotation holds `transcript`.
    pub fn from_transcript(transcript: &str) -> Self {
        Self::from_value(serde_json::json!({
            "responses": [{ "textAnnotations": [{ "description": transcript }] }]
        }))
    }

    /// The underlying payload.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Compact JSON form of the payload.
    pub fn to_raw_string(&self) -> String {
        self.raw.to_string()
    }

    fn first_response(&self) -> Option<&Value> {
        self.raw.get("responses")?.as_array()?.first()
    }

    /// Full document transcript: the first annotation's description.
    ///
    /// Returns an empty string when the response has no annotations or is
    /// missing any part of the expected structure.
    pub fn transcript(&self) -> &str {
        self.first_response()
            .and_then(|response| response.get("textAnnotations")?.as_array()?.first())
            .and_then(|annotation| annotation.get("description")?.as_str())
            .unwrap_or("")
    }

    /// Typed annotations of the first response. Malformed entries are skipped.
    pub fn annotations(&self) -> Vec<TextAnnotation> {
        self.first_response()
            .and_then(|response| response.get("textAnnotations")?.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| TextAnnotation::deserialize(entry).ok())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    }

    /// Error message embedded by the provider for this image, if any.
    pub fn provider_error(&self) -> Option<&str> {
        self.first_response()?.get("error")?.get("message")?.as_str()
    }
}

impl Default for RecognitionResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Capability that turns image bytes into a recognition result.
pub trait TextRecognizer {
    /// Recognize the text in one encoded image.
    fn recognize(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<RecognitionResult, OcrError>> + Send;
}

/// Recognizer that always returns the same stored result.
///
/// Used for offline runs on saved responses and in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedRecognizer {
    result: RecognitionResult,
}

impl FixedRecognizer {
    pub fn new(result: RecognitionResult) -> Self {
        Self { result }
    }
}

impl TextRecognizer for FixedRecognizer {
    fn recognize(
        &self,
        _image: &[u8],
    ) -> impl Future<Output = Result<RecognitionResult, OcrError>> + Send {
        let result = self.result.clone();
        async move { Ok(result) }
    }
}

/// Guess the encoding of an uploaded image from its magic bytes.
pub fn detect_image_format(image: &[u8]) -> Option<ImageFormat> {
    let format = image::guess_format(image).ok();
    debug!("Detected image format: {:?}", format);
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_transcript_from_first_annotation() {
        let result = RecognitionResult::from_value(json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "이마트\n합계 10,000", "locale": "ko" },
                    { "description": "이마트" }
                ]
            }]
        }));

        assert_eq!(result.transcript(), "이마트\n합계 10,000");
        assert_eq!(result.annotations().len(), 2);
        assert_eq!(result.annotations()[0].locale.as_deref(), Some("ko"));
    }

    #[test]
    fn test_no_annotations_is_empty_transcript() {
        let cases = [
            json!({ "responses": [{}] }),
            json!({ "responses": [{ "textAnnotations": [] }] }),
            json!({ "responses": [] }),
            json!({}),
            json!({ "responses": "nope" }),
            json!({ "responses": [{ "textAnnotations": { "description": "x" } }] }),
            json!({ "responses": [{ "textAnnotations": [{ "description": 42 }] }] }),
            json!(null),
        ];

        for raw in cases {
            let result = RecognitionResult::from_value(raw.clone());
            assert_eq!(result.transcript(), "", "payload: {}", raw);
        }
    }

    #[test]
    fn test_malformed_annotation_entries_are_skipped() {
        let result = RecognitionResult::from_value(json!({
            "responses": [{
                "textAnnotations": [
                    "not an object",
                    { "description": "ok" }
                ]
            }]
        }));

        let annotations = result.annotations();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].description, "ok");
    }

    #[test]
    fn test_provider_error() {
        let result = RecognitionResult::from_value(json!({
            "responses": [{ "error": { "code": 3, "message": "Bad image data." } }]
        }));

        assert_eq!(result.provider_error(), Some("Bad image data."));
        assert_eq!(result.transcript(), "");
    }

    #[test]
    fn test_from_json_rejects_non_json() {
        assert!(matches!(
            RecognitionResult::from_json("not json"),
            Err(OcrError::Decode(_))
        ));
    }

    #[test]
    fn test_raw_string_round_trips_payload() {
        let result = RecognitionResult::from_transcript("영수증");
        let reparsed = RecognitionResult::from_json(&result.to_raw_string()).unwrap();
        assert_eq!(reparsed.transcript(), "영수증");
    }

    #[test]
    fn test_detect_image_format() {
        let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(detect_image_format(&png_magic), Some(ImageFormat::Png));
        assert_eq!(detect_image_format(b"plain text"), None);
    }

    #[tokio::test]
    async fn test_fixed_recognizer() {
        let recognizer = FixedRecognizer::new(RecognitionResult::from_transcript("abc"));
        let result = recognizer.recognize(b"ignored").await.unwrap();
        assert_eq!(result.transcript(), "abc");
    }
}
