//! Rule-based field extractors for receipts.
//!
//! Each field has its own pattern and extractor so one can be tuned
//! without touching the others.

pub mod amounts;
pub mod dates;
pub mod lines;
pub mod merchant;
pub mod patterns;

pub use amounts::{AmountExtractor, extract_total_amount, parse_amount};
pub use dates::{DateExtractor, extract_trade_date};
pub use lines::segment_lines;
pub use merchant::{MerchantExtractor, extract_store_name, is_boilerplate, is_merchant_candidate};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, applying the field's tie-break policy.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A located field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
