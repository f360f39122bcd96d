//! Total amount extraction for receipts.

use tracing::debug;

use super::patterns::TOTAL_AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Labeled total amount extractor.
///
/// `extract` returns the amount of the *last* labeled total in the text.
/// Receipts often print a subtotal before the final payable amount, so a
/// later label wins over an earlier one regardless of size.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<u64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().last()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in TOTAL_AMOUNT.captures_iter(text) {
            let Some(full_match) = caps.get(0) else {
                continue;
            };

            match parse_amount(&caps[2]) {
                Some(amount) => results.push(
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                ),
                None => debug!("Skipping unparseable amount {:?}", &caps[2]),
            }
        }

        results
    }
}

/// Parse a comma-grouped whole amount (e.g. "12,500").
///
/// Returns `None` for digit-less captures like ",,," or values that
/// overflow `u64`.
pub fn parse_amount(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

/// Extract the total amount, 0 when no labeled total is found.
pub fn extract_total_amount(text: &str) -> u64 {
    AmountExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0)
}
