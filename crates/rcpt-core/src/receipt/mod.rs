//! Receipt field extraction module.

mod parser;
pub mod rules;
mod scanner;

pub use parser::{ExtractionResult, ReceiptParser};
pub use scanner::ReceiptScanner;

use crate::models::receipt::ExtractedReceipt;

/// Extract a receipt record from a transcript.
///
/// Shorthand for `ReceiptParser::new().parse(text).receipt`.
pub fn extract_receipt(text: &str) -> ExtractedReceipt {
    ReceiptParser::new().parse(text).receipt
}
