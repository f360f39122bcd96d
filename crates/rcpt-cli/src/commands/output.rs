//! Output formatting for extracted receipts.

use rcpt_core::ExtractedReceipt;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_receipt(
    receipt: &ExtractedReceipt,
    format: OutputFormat,
    pretty_json: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty_json => Ok(serde_json::to_string_pretty(receipt)?),
        OutputFormat::Json => Ok(serde_json::to_string(receipt)?),
        OutputFormat::Csv => format_csv(receipt),
        OutputFormat::Text => Ok(format_text(receipt)),
    }
}

fn format_csv(receipt: &ExtractedReceipt) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let total = receipt.total_amount.to_string();

    wtr.write_record(["store_name", "trade_date", "total_amount"])?;
    wtr.write_record([
        receipt.store_name.as_str(),
        receipt.trade_date.as_str(),
        total.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(receipt: &ExtractedReceipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("Store: {}\n", receipt.store_name));

    let date = match receipt.trade_date_parsed() {
        Some(parsed) => format!("{} ({})", receipt.trade_date, parsed.format("%Y-%m-%d")),
        None if receipt.has_trade_date() => receipt.trade_date.clone(),
        None => "-".to_string(),
    };
    output.push_str(&format!("Date:  {}\n", date));
    output.push_str(&format!("Total: {}\n", receipt.total_amount));

    output
}
