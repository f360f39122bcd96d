//! Transaction date extraction for receipts.

use super::patterns::TRADE_DATE;
use super::{ExtractionMatch, FieldExtractor};

/// Transaction date extractor.
///
/// `extract` returns the *first* date-shaped token. The transaction date
/// sits in the header; later dates are usually card expiry or promotions.
/// Matches are returned verbatim, without reformatting.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        TRADE_DATE.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str()).with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        TRADE_DATE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the trade date, empty when no date is found.
pub fn extract_trade_date(text: &str) -> String {
    DateExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}
