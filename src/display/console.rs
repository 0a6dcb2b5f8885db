//! Console report formatting
//!
//! Renders a [`SplitReport`] as the fixed-layout text report: header, per
//! category summary, every expense, and the final balances.

use crossterm::style::{Color, Stylize};
use rust_decimal::Decimal;

use crate::reports::{ExpenseLine, SplitReport};

use super::currency::CurrencyFormat;

/// Width of the label column
pub const LEFT_COLUMN_WIDTH: usize = 40;

const DIVIDER: &str = "-------------------------------";

/// Options for the console report
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Application name for the header
    pub application_name: String,
    /// Currency rules
    pub format: CurrencyFormat,
    /// Show each participant's net contribution per category
    pub include_details: bool,
    /// Emit ANSI colors
    pub use_color: bool,
}

/// Builds the console report text
pub struct ConsoleWriter<'a> {
    options: &'a ConsoleOptions,
    output: String,
}

impl<'a> ConsoleWriter<'a> {
    /// Create a writer with the given options
    pub fn new(options: &'a ConsoleOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    /// Render the full report
    pub fn render(mut self, report: &SplitReport) -> String {
        self.write_header(report);

        self.write_divider();
        self.write_category_summary(report);

        self.write_divider();
        self.write_expenses("Expenses:", report.expense_lines());

        if !report.unassigned().is_empty() {
            self.write_divider();
            self.write_expenses("Unassigned expenses:", report.unassigned());
        }

        self.write_divider();
        self.write_result(report);

        self.output
    }

    fn write_header(&mut self, report: &SplitReport) {
        let summary = report.summary();
        self.line(
            &format!(
                "-- {} | {} --\n",
                self.options.application_name, summary.project_name
            ),
            Color::White,
        );

        self.left_column("Total expenses:", Color::DarkGrey);
        let total = self.money(summary.total_expenses);
        self.line(&total, Color::White);

        self.left_column("Number of people:", Color::DarkGrey);
        self.line(&summary.person_count.to_string(), Color::White);

        self.left_column("Number of categories:", Color::DarkGrey);
        self.line(&summary.category_count.to_string(), Color::White);
    }

    fn write_category_summary(&mut self, report: &SplitReport) {
        self.line("Per category:\n", Color::Grey);

        for category in report.categories() {
            self.left_column(&format!(" {}:", category.display_name), Color::White);
            let total = self.money(category.total);
            self.text(&total, Color::White);
            let share = format!(" ({} per person)", self.money(category.per_person_share));
            self.line(&share, Color::DarkGrey);

            if self.options.include_details {
                self.left_column("   people involved:", Color::DarkGrey);
                self.line("", Color::Grey);

                for detail in &category.details {
                    self.left_column(&format!("   ...{}:", detail.name), Color::DarkGrey);
                    let amount = self.money(detail.net_contribution);
                    self.line(&amount, sign_color(detail.net_contribution));
                }
                self.line("", Color::Grey);
            }
        }
    }

    fn write_expenses(&mut self, heading: &str, lines: &[ExpenseLine]) {
        self.line(&format!("{}\n", heading), Color::Grey);

        for expense in lines {
            self.text(&format!(" - {} | ", expense.description), Color::Grey);
            self.text(&format!("[{}]", expense.category), Color::DarkCyan);
            let amount = format!(" | {} | ", self.money(expense.amount));
            self.text(&amount, Color::Grey);
            self.line(&format!("({})", expense.creditor), Color::DarkGrey);
        }
    }

    fn write_result(&mut self, report: &SplitReport) {
        self.line("Result:\n", Color::Grey);

        for balance in report.balances() {
            self.left_column(&format!("   {}:", balance.name), Color::DarkGrey);
            let amount = self.money(balance.net_balance);
            self.line(&amount, sign_color(balance.net_balance));
        }
    }

    fn write_divider(&mut self) {
        self.line(&format!("\n{}\n", DIVIDER), Color::White);
    }

    fn money(&self, amount: Decimal) -> String {
        self.options.format.format(amount)
    }

    fn left_column(&mut self, label: &str, color: Color) {
        let padded = format!("{:<width$}", label, width = LEFT_COLUMN_WIDTH);
        self.text(&padded, color);
    }

    fn line(&mut self, text: &str, color: Color) {
        self.text(text, color);
        self.output.push('\n');
    }

    fn text(&mut self, text: &str, color: Color) {
        if self.options.use_color && !text.is_empty() {
            self.output.push_str(&text.with(color).to_string());
        } else {
            self.output.push_str(text);
        }
    }
}

fn sign_color(amount: Decimal) -> Color {
    if amount.is_sign_negative() && !amount.is_zero() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Render the console report as a string
pub fn render_console_report(report: &SplitReport, options: &ConsoleOptions) -> String {
    ConsoleWriter::new(options).render(report)
}
