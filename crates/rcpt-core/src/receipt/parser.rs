//! Receipt parser combining the field rules.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::receipt::{ExtractedReceipt, UNKNOWN_MERCHANT};
use crate::ocr::RecognitionResult;

use super::rules::{AmountExtractor, DateExtractor, FieldExtractor, MerchantExtractor};

/// Result of receipt extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Extracted receipt record.
    pub receipt: ExtractedReceipt,
    /// Fields that fell back to defaults, and provider-reported problems.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based receipt parser.
///
/// Stateless: the same transcript always yields the same record, and a
/// single parser can be shared across concurrent scans.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptParser;

impl ReceiptParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a transcript. Never fails; missing fields take their defaults.
    ///
    /// `rawText` of the record is the transcript itself.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        self.parse_with_raw(text, text.to_string())
    }

    /// Parse the transcript of a recognition response.
    ///
    /// `rawText` of the record is the serialized response payload.
    pub fn parse_recognition(&self, result: &RecognitionResult) -> ExtractionResult {
        let mut extraction = self.parse_with_raw(result.transcript(), result.to_raw_string());

        if let Some(message) = result.provider_error() {
            warn!("Recognition response carries an error: {}", message);
            extraction
                .warnings
                .push(format!("OCR provider reported: {}", message));
        }

        extraction
    }

    fn parse_with_raw(&self, text: &str, raw_text: String) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing receipt from {} characters of text", text.len());

        let store_name = MerchantExtractor::new().extract(text);
        let trade_date = DateExtractor::new().extract(text);
        let total_amount = AmountExtractor::new().extract(text);

        // Warnings follow the matches: a printed total of 0 is still found.
        let mut warnings = Vec::new();
        if store_name.is_none() {
            warnings.push("Could not extract store name".to_string());
        }
        if trade_date.is_none() {
            warnings.push("Could not extract trade date".to_string());
        }
        if total_amount.is_none() {
            warnings.push("Could not extract total amount".to_string());
        }

        let receipt = ExtractedReceipt {
            raw_text,
            store_name: store_name
                .map(|m| m.value)
                .unwrap_or_else(|| UNKNOWN_MERCHANT.to_string()),
            trade_date: trade_date.map(|m| m.value).unwrap_or_default(),
            total_amount: total_amount.map(|m| m.value).unwrap_or(0),
        };

        debug!(
            "Extracted store {:?}, date {:?}, total {}",
            receipt.store_name, receipt.trade_date, receipt.total_amount
        );

        ExtractionResult {
            receipt,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
