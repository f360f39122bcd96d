//! Common regex patterns for Korean receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header boilerplate that is never the merchant name:
    // for customer, receipt, Republic of Korea, discount store, credit sale, handover
    pub static ref BOILERPLATE: Regex = Regex::new(
        r"고객용|영수증|대한민국|할인점|신용매출|인수인계"
    ).unwrap();

    // Labeled totals: total, payment amount, total amount, approved amount
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(합\s*계|결제\s*금액|합계\s*금액|승인\s*금액)[\s:]*([0-9,]{3,})"
    ).unwrap();

    // YYYY-MM-DD / YYYY/MM/DD, then YY-MM-DD / YY/MM/DD
    pub static ref TRADE_DATE: Regex = Regex::new(
        r"[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}|[0-9]{2}[-/][0-9]{2}[-/][0-9]{2}"
    ).unwrap();
}
