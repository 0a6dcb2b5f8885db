//! CLI handler for the split report
//!
//! Turns the parsed command line into [`ReportOptions`], runs the allocation
//! and writes whichever outputs were asked for.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::ReportOptions;
use crate::display::{render_console_report, ConsoleOptions, DEFAULT_CULTURE};
use crate::error::{SplitterError, SplitterResult};
use crate::export::{generate_site, write_balances_csv, HtmlOptions};
use crate::reports::SplitReport;
use crate::services::Project;
use crate::storage::read_project_input;

/// Report arguments
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Input document with the project, persons and expenses (JSON or YAML)
    #[arg(short = 'p', long = "persons-and-expenses-list", value_name = "FILE")]
    pub input: PathBuf,

    /// Culture used to format amounts (e.g. sv-SE, en-US)
    #[arg(
        short,
        long,
        env = "COST_SPLITTER_CULTURE",
        default_value = DEFAULT_CULTURE
    )]
    pub culture: String,

    /// Write the HTML report
    #[arg(long)]
    pub generate_html: bool,

    /// Directory for the HTML report (defaults to the current directory)
    #[arg(short = 't', long, value_name = "DIR")]
    pub html_target_path: Option<PathBuf>,

    /// Load bootstrap and jQuery from a local directory instead of a CDN
    #[arg(long = "use-local-js-and-css")]
    pub use_local_assets: bool,

    /// Directory holding bootstrap.css, bootstrap.js and jquery.js
    #[arg(long = "local-js-and-css-path", value_name = "DIR")]
    pub local_assets_path: Option<PathBuf>,

    /// Print the report to the console
    #[arg(long = "output-result-to-console")]
    pub output_to_console: bool,

    /// Include every participant's share per category in the console report
    #[arg(long)]
    pub print_category_details: bool,

    /// Write the final balances to a CSV file
    #[arg(long, value_name = "FILE")]
    pub export_csv: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl ReportArgs {
    /// Convert the arguments into run options
    pub fn into_options(self) -> ReportOptions {
        ReportOptions {
            input_path: self.input,
            culture: self.culture,
            generate_html: self.generate_html,
            html_target_path: self.html_target_path,
            use_local_assets: self.use_local_assets,
            local_assets_path: self.local_assets_path,
            output_to_console: self.output_to_console,
            print_category_details: self.print_category_details,
            export_csv: self.export_csv,
            use_color: !self.no_color,
        }
    }
}

/// Build the split report for the configured input
///
/// Nothing is written here, so a failing allocation leaves no partial output.
pub fn build_report(options: &ReportOptions) -> SplitterResult<SplitReport> {
    options.validate()?;

    let input = read_project_input(&options.input_path)?;
    let mut project = Project::from_input(input)?;
    info!(
        project = project.name(),
        persons = project.persons().len(),
        categories = project.categories().len(),
        "loaded project"
    );

    let categories = project.allocate()?;
    SplitReport::assemble(&project, categories)
}

/// Run the report and write its outputs, console text going to `out`
pub fn handle_report<W: Write>(
    options: &ReportOptions,
    application_name: &str,
    out: &mut W,
) -> SplitterResult<()> {
    let report = build_report(options)?;
    let format = options.currency_format()?;

    if options.wants_console() {
        let console = ConsoleOptions {
            application_name: application_name.to_string(),
            format: format.clone(),
            include_details: options.print_category_details,
            use_color: options.use_color,
        };
        write!(out, "{}", render_console_report(&report, &console))
            .map_err(|e| SplitterError::io("<stdout>", e))?;
    }

    if options.generate_html {
        let html = HtmlOptions {
            application_name: application_name.to_string(),
            format,
            assets: options.asset_source()?,
        };
        let paths = options.report_paths()?;
        generate_site(&report, &html, &paths)?;
        writeln!(out, "HTML report written to: {}", paths.main_page().display())
            .map_err(|e| SplitterError::io("<stdout>", e))?;
    }

    if let Some(path) = &options.export_csv {
        write_balances_csv(&report, path)?;
        writeln!(out, "Balances exported to: {}", path.display())
            .map_err(|e| SplitterError::io("<stdout>", e))?;
    }

    Ok(())
}
