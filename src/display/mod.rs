//! Display formatting for terminal output
//!
//! Provides currency formatting and the console rendering of a split report.

pub mod console;
pub mod currency;

pub use console::{render_console_report, ConsoleOptions, ConsoleWriter};
pub use currency::{CurrencyFormat, SymbolPlacement, DEFAULT_CULTURE};
