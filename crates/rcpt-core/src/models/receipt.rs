//! Receipt data model produced by field extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store name used when no line of the transcript qualifies as a merchant.
pub const UNKNOWN_MERCHANT: &str = "알 수 없는 상호";

/// Date layouts accepted by the date extractor, by printed year width.
const LONG_YEAR_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const SHORT_YEAR_FORMATS: [&str; 2] = ["%y-%m-%d", "%y/%m/%d"];

/// Structured fields extracted from one receipt.
///
/// Every field is always populated; defaults stand in for "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedReceipt {
    /// Serialized recognition payload, or the transcript when parsed from text.
    pub raw_text: String,

    /// Merchant name, or [`UNKNOWN_MERCHANT`].
    pub store_name: String,

    /// Transaction date exactly as printed, or empty.
    pub trade_date: String,

    /// Total in whole currency units, 0 when absent.
    pub total_amount: u64,
}

impl ExtractedReceipt {
    /// Create a record with every field at its default.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            store_name: UNKNOWN_MERCHANT.to_string(),
            trade_date: String::new(),
            total_amount: 0,
        }
    }

    pub fn has_store_name(&self) -> bool {
        self.store_name != UNKNOWN_MERCHANT
    }

    pub fn has_trade_date(&self) -> bool {
        !self.trade_date.is_empty()
    }

    /// Whether the total differs from its default.
    ///
    /// A printed total of 0 reads as absent here; extraction warnings are
    /// based on the extractor match instead.
    pub fn has_total_amount(&self) -> bool {
        self.total_amount > 0
    }

    /// Interpret the trade date as a calendar date.
    ///
    /// Only used for display; `trade_date` keeps the printed layout.
    /// Returns `None` for an empty or impossible date such as `2024-02-31`.
    pub fn trade_date_parsed(&self) -> Option<NaiveDate> {
        // chrono's %Y also accepts two digits, so pick by the printed width.
        let year_len = self.trade_date.find(['-', '/'])?;
        let formats = match year_len {
            4 => &LONG_YEAR_FORMATS,
            2 => &SHORT_YEAR_FORMATS,
            _ => return None,
        };

        formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&self.trade_date, fmt).ok())
    }

    /// Names of the fields that fell back to their defaults.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_store_name() {
            missing.push("storeName");
        }
        if !self.has_trade_date() {
            missing.push("tradeDate");
        }
        if !self.has_total_amount() {
            missing.push("totalAmount");
        }
        missing
    }
}

impl Default for ExtractedReceipt {
    fn default() -> Self {
        Self::new(String::new())
    }
}
