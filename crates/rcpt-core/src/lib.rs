//! Core library for receipt OCR processing.
//!
//! This crate provides:
//! - the OCR provider boundary (recognition responses, injected recognizer)
//! - a Google Cloud Vision client (`vision` feature)
//! - receipt field extraction (store name, trade date, total amount)
//! - receipt data models and configuration

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{OcrError, RcptError, Result};
pub use models::config::{OutputConfig, RcptConfig, VisionConfig};
pub use models::receipt::{ExtractedReceipt, UNKNOWN_MERCHANT};
pub use ocr::{FixedRecognizer, RecognitionResult, TextAnnotation, TextRecognizer};
#[cfg(feature = "vision")]
pub use ocr::VisionClient;
pub use receipt::{ExtractionResult, ReceiptParser, ReceiptScanner, extract_receipt};
