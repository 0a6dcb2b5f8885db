use anyhow::Result;
use clap::Parser;

use cost_splitter::cli::{handle_report, ReportArgs};
use cost_splitter::logging::init_logger;

const APPLICATION_NAME: &str = "Cost Splitter";

#[derive(Parser)]
#[command(
    name = "cost-splitter",
    version,
    about = "Split shared project costs per category",
    long_about = "Cost Splitter reads a project's persons, expense categories and \
                  expenses, divides each category's total evenly between the people \
                  taking part in it, and reports who is owed and who owes."
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = cli.report.into_options();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    handle_report(&options, APPLICATION_NAME, &mut out)?;

    Ok(())
}
