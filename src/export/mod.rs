//! Export module for the cost splitter
//!
//! Provides the file outputs of a split report:
//! - HTML: a small static site with summary, expenses and balances
//! - CSV: final balances (spreadsheet-compatible)

pub mod csv;
pub mod html;

pub use csv::{export_balances_csv, write_balances_csv, BALANCE_HEADERS};
pub use html::{
    escape_html, generate_site, render_expenses_page, render_result_page, render_summary_page,
    HtmlOptions, Page,
};
