//! Image-to-receipt scan pipeline.

use tracing::{info, warn};

use crate::error::{OcrError, Result};
use crate::ocr::{TextRecognizer, detect_image_format};

use super::parser::{ExtractionResult, ReceiptParser};

/// Runs one uploaded image through recognition and field extraction.
///
/// The recognizer is injected so the pipeline can run against a real
/// provider or a stored response.
pub struct ReceiptScanner<R> {
    recognizer: R,
    parser: ReceiptParser,
}

impl<R: TextRecognizer> ReceiptScanner<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            parser: ReceiptParser::new(),
        }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Recognize and extract one receipt image.
    ///
    /// Only recognizer failures are errors; a response without usable text
    /// still produces a default-valued record.
    pub async fn scan(&self, image: &[u8]) -> Result<ExtractionResult> {
        if image.is_empty() {
            return Err(OcrError::InvalidImage("image is empty".to_string()).into());
        }

        match detect_image_format(image) {
            Some(format) => info!("Scanning {:?} image ({} bytes)", format, image.len()),
            None => warn!(
                "Unrecognised image format ({} bytes), sending to OCR anyway",
                image.len()
            ),
        }

        let recognition = self.recognizer.recognize(image).await?;
        Ok(self.parser.parse_recognition(&recognition))
    }
}
