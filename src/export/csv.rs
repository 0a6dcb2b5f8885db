//! CSV Export functionality
//!
//! Exports the final balances to CSV, one row per person in input order.

use std::io::Write;
use std::path::Path;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::error::{SplitterError, SplitterResult};
use crate::reports::SplitReport;
use crate::storage::write_text_atomic;

/// Column headings of the balance export
pub const BALANCE_HEADERS: [&str; 4] = ["Name", "Total expenses", "Share", "Balance"];

/// Export every person's balance to CSV
pub fn export_balances_csv<W: Write>(report: &SplitReport, writer: W) -> SplitterResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(BALANCE_HEADERS)?;

    for balance in report.balances() {
        wtr.write_record([
            balance.name.clone(),
            amount(balance.total_expenses),
            amount(balance.total_share),
            amount(balance.net_balance),
        ])?;
    }

    wtr.flush()
        .map_err(|e| SplitterError::Export(e.to_string()))?;
    Ok(())
}

/// Export the balances to a file, replacing it atomically
pub fn write_balances_csv(report: &SplitReport, path: &Path) -> SplitterResult<()> {
    let mut buffer = Vec::new();
    export_balances_csv(report, &mut buffer)?;
    let text = String::from_utf8(buffer).map_err(|e| SplitterError::Export(e.to_string()))?;

    write_text_atomic(path, &text)?;
    info!(path = %path.display(), rows = report.balances().len(), "wrote CSV export");
    Ok(())
}

/// Plain two-decimal amount, no currency symbol or grouping
fn amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.2}", rounded)
}
