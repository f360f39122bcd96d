//! Merchant name extraction.
//!
//! Receipts print the store name near the top, often after legal or
//! printer boilerplate. The first line that is not boilerplate wins.

use super::lines::segment_lines;
use super::patterns::BOILERPLATE;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::receipt::UNKNOWN_MERCHANT;

/// Whether a line contains any of the header boilerplate terms.
pub fn is_boilerplate(line: &str) -> bool {
    BOILERPLATE.is_match(line)
}

/// Whether a trimmed line may be the merchant name.
pub fn is_merchant_candidate(line: &str) -> bool {
    line.chars().count() > 1 && !is_boilerplate(line)
}

/// Merchant name field extractor.
pub struct MerchantExtractor;

impl MerchantExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        segment_lines(text)
            .into_iter()
            .filter(|line| is_merchant_candidate(line))
            .map(|line| ExtractionMatch::new(line.to_string(), line))
            .collect()
    }
}

/// Extract the store name, falling back to [`UNKNOWN_MERCHANT`].
pub fn extract_store_name(text: &str) -> String {
    MerchantExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| UNKNOWN_MERCHANT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skips_boilerplate_header() {
        let text = "[고객용]\n신용매출 영수증\n대한민국 할인점\n롯데마트\n합계 10,000";
        assert_eq!(extract_store_name(text), "롯데마트");
    }

    #[test]
    fn test_skips_short_and_blank_lines() {
        let text = "\n  \n*\n홈플러스 강서점";
        assert_eq!(extract_store_name(text), "홈플러스 강서점");
    }

    #[test]
    fn test_boilerplate_is_substring_match() {
        assert!(is_boilerplate("** 인수인계 내역 **"));
        assert!(is_boilerplate("(고객용)"));
        assert!(!is_boilerplate("GS25 역삼점"));
    }

    #[test]
    fn test_only_boilerplate_yields_sentinel() {
        let text = "고객용\n영수증\n대한민국";
        assert_eq!(extract_store_name(text), UNKNOWN_MERCHANT);
    }

    #[test]
    fn test_empty_transcript_yields_sentinel() {
        assert_eq!(extract_store_name(""), UNKNOWN_MERCHANT);
        assert_eq!(extract_store_name("x"), UNKNOWN_MERCHANT);
    }

    #[test]
    fn test_two_character_korean_name() {
        // Length is counted in characters, not bytes.
        assert!(is_merchant_candidate("다이소"));
        assert!(is_merchant_candidate("CU"));
        assert!(!is_merchant_candidate("가"));
    }

    #[test]
    fn test_extract_all_keeps_line_order() {
        let extractor = MerchantExtractor::new();
        let names: Vec<String> = extractor
            .extract_all("영수증\n스타벅스\n아메리카노")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(names, vec!["스타벅스", "아메리카노"]);
    }
}
