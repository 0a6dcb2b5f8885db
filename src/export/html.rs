//! HTML report export
//!
//! Writes the report as three linked static pages sharing one navigation bar:
//! a summary (`main.html`), the expense listing and the final balances.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::info;

use crate::config::paths::{BOOTSTRAP_JS_FILE, JQUERY_JS_FILE, MAIN_CSS_FILE};
use crate::config::{AssetSource, ReportPaths};
use crate::display::CurrencyFormat;
use crate::error::SplitterResult;
use crate::reports::SplitReport;
use crate::storage::write_text_atomic;

const CDN_STYLESHEET: &str = "https://bootswatch.com/5/darkly/bootstrap.min.css";
const CDN_JQUERY: &str = "<script src=\"https://code.jquery.com/jquery-3.6.0.min.js\" integrity=\"sha256-/xUj+3OJU5yExlq6GSYGSHk7tPXikynS7ogEvDej/m4=\" crossorigin=\"anonymous\"></script>";
const CDN_BOOTSTRAP: &str = "<script src=\"https://cdn.jsdelivr.net/npm/bootstrap@5.2.0-beta1/dist/js/bootstrap.min.js\" integrity=\"sha384-kjU+l4N0Yf4ZOJErLsIcvOU2qSb74wXpOhqTvwVx3OElZRweTnQ6d31fXEoRD1Jy\" crossorigin=\"anonymous\"></script>";

const ROW_CLASSES: [&str; 2] = ["table-dark", "table-secondary"];

/// Options shared by every page
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Application name for titles and the navigation brand
    pub application_name: String,
    /// Currency rules
    pub format: CurrencyFormat,
    /// Stylesheet and script source
    pub assets: AssetSource,
}

/// The pages of the site, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Summary,
    Expenses,
    Result,
}

impl Page {
    /// All pages in navigation order
    pub fn all() -> &'static [Self] {
        &[Self::Summary, Self::Expenses, Self::Result]
    }

    /// Label shown in the navigation bar and headline
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Expenses => "Expenses",
            Self::Result => "Result",
        }
    }

    /// Link to `target` as seen from this page
    fn link_to(&self, target: Page) -> &'static str {
        match (self, target) {
            (Self::Summary, Self::Summary) => "main.html",
            (Self::Summary, Self::Expenses) => "pages/expenses.html",
            (Self::Summary, Self::Result) => "pages/result.html",
            (_, Self::Summary) => "../main.html",
            (_, Self::Expenses) => "expenses.html",
            (_, Self::Result) => "result.html",
        }
    }
}

/// Builds the markup of one page
struct HtmlPage<'a> {
    page: Page,
    title: &'a str,
    options: &'a HtmlOptions,
    content: String,
}

impl<'a> HtmlPage<'a> {
    fn new(page: Page, title: &'a str, options: &'a HtmlOptions) -> Self {
        Self {
            page,
            title,
            options,
            content: String::new(),
        }
    }

    fn line(&mut self, text: &str) {
        self.content.push_str(text);
        self.content.push('\n');
    }

    fn money(&self, amount: Decimal) -> String {
        escape_html(&self.options.format.format(amount))
    }

    fn start(&mut self) {
        self.line("<!DOCTYPE html>");
        self.line("<html lang=\"en\">");
        self.head();
        self.line("<body>");
        self.navigation();
        let headline = format!(
            "<div class=\"mt-5 d-flex justify-content-center\">\n<h2>{} of <small class=\"text-muted\">{}</small></h2>\n</div>",
            self.page.label(),
            escape_html(self.title)
        );
        self.line(&headline);
    }

    fn finish(mut self) -> String {
        self.scripts();
        self.line("</body>");
        self.line("</html>");
        self.content
    }

    fn head(&mut self) {
        self.line("<head>");
        self.line("<meta charset=\"utf-8\">");
        let title = format!(
            "<title>{} | {}</title>",
            escape_html(&self.options.application_name),
            escape_html(self.title)
        );
        self.line(&title);
        let href = match &self.options.assets {
            AssetSource::Cdn => CDN_STYLESHEET.to_string(),
            AssetSource::Local(dir) => asset_href(dir, MAIN_CSS_FILE),
        };
        self.line(&format!("<link rel=\"stylesheet\" href=\"{}\">", href));
        self.line("</head>");
    }

    fn navigation(&mut self) {
        self.line("<nav class=\"navbar navbar-expand-lg navbar-dark bg-dark\">");
        self.line("<div class=\"container-fluid\">");

        let brand_href = if self.page == Page::Summary {
            "#"
        } else {
            self.page.link_to(Page::Summary)
        };
        let brand = format!(
            "<a class=\"navbar-brand\" href=\"{}\">{}</a>",
            brand_href,
            escape_html(&self.options.application_name)
        );
        self.line(&brand);

        self.line("<button class=\"navbar-toggler\" type=\"button\" data-bs-toggle=\"collapse\" data-bs-target=\"#navbarColor01\" aria-controls=\"navbarColor01\" aria-expanded=\"false\" aria-label=\"Toggle navigation\">");
        self.line("<span class=\"navbar-toggler-icon\"></span>");
        self.line("</button>");
        self.line("<div class=\"collapse navbar-collapse\" id=\"navbarColor01\">");
        self.line("<ul class=\"navbar-nav me-auto\">");

        for &target in Page::all() {
            let selected = target == self.page;
            let (href, class) = if selected {
                ("#", "nav-link active")
            } else {
                (self.page.link_to(target), "nav-link")
            };

            self.line("<li class=\"nav-item\">");
            self.line(&format!(
                "<a class=\"{}\" href=\"{}\">{}",
                class,
                href,
                target.label()
            ));
            if selected {
                self.line("<span class=\"visually-hidden\">(current)</span>");
            }
            self.line("</a>");
            self.line("</li>");
        }

        self.line("</ul>");
        self.line("</div>");
        self.line("</div>");
        self.line("</nav>");
    }

    fn scripts(&mut self) {
        match &self.options.assets {
            AssetSource::Cdn => {
                self.line(CDN_JQUERY);
                self.line(CDN_BOOTSTRAP);
            }
            AssetSource::Local(dir) => {
                let jquery = asset_href(dir, JQUERY_JS_FILE);
                let bootstrap = asset_href(dir, BOOTSTRAP_JS_FILE);
                self.line(&format!("<script src=\"{}\"></script>", jquery));
                self.line(&format!("<script src=\"{}\"></script>", bootstrap));
            }
        }
    }

    fn open_centered_table(&mut self) {
        self.line("<div class=\"mt-5 row justify-content-center\">");
        self.line("<div class=\"col-auto\">");
        self.line("<table class=\"table table-hover\">");
    }

    fn close_centered_table(&mut self) {
        self.line("</table>");
        self.line("</div>");
        self.line("</div>");
    }
}

/// Render the summary page
pub fn render_summary_page(report: &SplitReport, options: &HtmlOptions) -> String {
    let summary = report.summary();
    let mut page = HtmlPage::new(Page::Summary, &summary.project_name, options);
    page.start();

    page.open_centered_table();
    page.line("<tbody>");
    let total = page.money(summary.total_expenses);
    let rows = [
        ("Total expenses:", total),
        ("Number of people:", summary.person_count.to_string()),
        ("Number of categories:", summary.category_count.to_string()),
    ];
    for (label, value) in rows {
        page.line("<tr>");
        page.line(&format!("<th class=\"text-muted\">{}</th>", label));
        page.line(&format!("<td>{}</td>", value));
        page.line("</tr>");
    }
    page.line("</tbody>");
    page.close_centered_table();

    page.line("<div class=\"mt-5\">");
    page.line("<div class=\"row justify-content-center\">");
    page.line("<div class=\"col-auto\">");
    page.line("<h4>Categories</h4>");
    page.line("<div class=\"mt-3 accordion\" id=\"categoryAccordion\">");

    for (index, category) in report.categories().iter().enumerate() {
        let i = index + 1;
        let total = page.money(category.total);
        let share = page.money(category.per_person_share);

        page.line("<div class=\"accordion-item\">");
        page.line(&format!("<h2 class=\"accordion-header\" id=\"heading{i}\">"));
        page.line(&format!(
            "<button class=\"accordion-button collapsed\" type=\"button\" data-bs-toggle=\"collapse\" data-bs-target=\"#collapse{i}\" aria-expanded=\"false\" aria-controls=\"collapse{i}\">"
        ));
        page.line("<ul style=\"list-style-type: none;\" class=\"px-5\">");
        page.line(&format!(
            "<li><h5><b>{}: {}</b></h5></li>",
            escape_html(&category.display_name),
            total
        ));
        page.line(&format!(
            "<li><small class=\"text-muted\">{} per person</small></li>",
            share
        ));
        page.line("</ul>");
        page.line("</button>");
        page.line("</h2>");
        page.line(&format!(
            "<div id=\"collapse{i}\" class=\"accordion-collapse collapse\" aria-labelledby=\"heading{i}\" data-bs-parent=\"#categoryAccordion\">"
        ));
        page.line("<div class=\"accordion-body\">");
        page.line("<ul class=\"list-group\">");

        for detail in &category.details {
            let amount = page.money(detail.net_contribution);
            page.line("<li class=\"list-group-item d-flex justify-content-between align-items-center\">");
            page.line(&escape_html(&detail.name));
            page.line(&format!(
                "<span class=\"badge bg-primary rounded-pill {}\">{}</span>",
                sign_class(detail.net_contribution),
                amount
            ));
            page.line("</li>");
        }

        page.line("</ul>");
        page.line("</div>");
        page.line("</div>");
        page.line("</div>");
    }

    page.line("</div>");
    page.line("</div>");
    page.line("</div>");
    page.line("</div>");

    page.finish()
}

/// Render the expense listing page
pub fn render_expenses_page(report: &SplitReport, options: &HtmlOptions) -> String {
    let mut page = HtmlPage::new(Page::Expenses, &report.summary().project_name, options);
    page.start();

    page.open_centered_table();
    page.line("<thead>");
    page.line("<tr>");
    for heading in ["Description", "Category", "Sum", "Creditor"] {
        page.line(&format!("<th scope=\"col\">{}</th>", heading));
    }
    page.line("</tr>");
    page.line("</thead>");

    page.line("<tbody>");
    for (index, expense) in report.all_expenses().iter().enumerate() {
        let amount = page.money(expense.amount);
        page.line(&format!("<tr class=\"{}\">", ROW_CLASSES[index % 2]));
        page.line(&format!("<td>{}</td>", escape_html(&expense.description)));
        page.line(&format!("<td>{}</td>", escape_html(&expense.category)));
        page.line(&format!("<td>{}</td>", amount));
        if expense.assigned {
            page.line(&format!("<td>{}</td>", escape_html(&expense.creditor)));
        } else {
            page.line(&format!(
                "<td class=\"text-warning\" title=\"Not assigned to any person\">{}</td>",
                escape_html(&expense.creditor)
            ));
        }
        page.line("</tr>");
    }
    page.line("</tbody>");
    page.close_centered_table();

    page.finish()
}

/// Render the balance listing page
pub fn render_result_page(report: &SplitReport, options: &HtmlOptions) -> String {
    let mut page = HtmlPage::new(Page::Result, &report.summary().project_name, options);
    page.start();

    page.open_centered_table();
    page.line("<tbody>");
    for (index, balance) in report.balances().iter().enumerate() {
        let amount = page.money(balance.net_balance);
        page.line(&format!("<tr class=\"{}\">", ROW_CLASSES[index % 2]));
        page.line(&format!("<td>{}</td>", escape_html(&balance.name)));
        page.line(&format!(
            "<td class=\"{} text-end\">{}</td>",
            sign_class(balance.net_balance),
            amount
        ));
        page.line("</tr>");
    }
    page.line("</tbody>");
    page.close_centered_table();

    page.finish()
}

/// Write all three pages, returning the written paths
pub fn generate_site(
    report: &SplitReport,
    options: &HtmlOptions,
    paths: &ReportPaths,
) -> SplitterResult<Vec<PathBuf>> {
    paths.ensure_directories()?;

    let pages = [
        (paths.main_page(), render_summary_page(report, options)),
        (paths.expenses_page(), render_expenses_page(report, options)),
        (paths.result_page(), render_result_page(report, options)),
    ];

    let mut written = Vec::with_capacity(pages.len());
    for (path, html) in pages {
        write_text_atomic(&path, &html)?;
        info!(path = %path.display(), "wrote HTML page");
        written.push(path);
    }
    Ok(written)
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn sign_class(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() && !amount.is_zero() {
        "text-danger"
    } else {
        "text-success"
    }
}

fn asset_href(dir: &Path, file: &str) -> String {
    escape_html(&dir.join(file).display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Person, ProjectInput};
    use crate::services::Project;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn report() -> SplitReport {
        let mut project = Project::from_input(ProjectInput {
            project_name: "Tom & Jerry's trip".into(),
            categories: vec![
                ExpenseCategory::new(1, "Food"),
                ExpenseCategory::new(2, "Fuel"),
            ],
            persons: vec![Person::new("Alice", [1, 2]), Person::new("Bob", [1])],
            expenses: vec![
                Expense::new("Alice", "Diesel", 2, dec!(60)),
                Expense::new("Bob", "<b>Pizza</b>", 1, dec!(40)),
                Expense::new("Eve", "Ice cream", 1, dec!(8)),
            ],
        })
        .unwrap();
        let categories = project.allocate().unwrap();
        SplitReport::assemble(&project, categories).unwrap()
    }

    fn options() -> HtmlOptions {
        HtmlOptions {
            application_name: "Cost Splitter".into(),
            format: CurrencyFormat::for_culture("en-US").unwrap(),
            assets: AssetSource::Cdn,
        }
    }

    #[test]
    fn test_summary_page() {
        let html = render_summary_page(&report(), &options());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Cost Splitter | Tom &amp; Jerry&#39;s trip</title>"));
        assert!(html.contains("<td>$100.00</td>"));
        assert!(html.contains("<li><h5><b>Food: $40.00</b></h5></li>"));
        assert!(html.contains("<li><small class=\"text-muted\">$20.00 per person</small></li>"));
        assert!(html.contains("<li><h5><b>Fuel: $60.00</b></h5></li>"));
        assert!(html.contains("badge bg-primary rounded-pill text-danger\">-$20.00"));
        assert!(html.contains(CDN_STYLESHEET));
        assert!(html.trim_end().ends_with("</html>"));

        let food = html.find("Food:").unwrap();
        let fuel = html.find("Fuel:").unwrap();
        assert!(food < fuel);
    }

    #[test]
    fn test_navigation_marks_current_page() {
        let html = render_expenses_page(&report(), &options());

        assert!(html.contains("<a class=\"navbar-brand\" href=\"../main.html\">Cost Splitter</a>"));
        assert!(html.contains("<a class=\"nav-link\" href=\"../main.html\">Summary"));
        assert!(html.contains("<a class=\"nav-link active\" href=\"#\">Expenses\n<span class=\"visually-hidden\">(current)</span>"));
        assert!(html.contains("<a class=\"nav-link\" href=\"result.html\">Result"));

        let main = render_summary_page(&report(), &options());
        assert!(main.contains("<a class=\"navbar-brand\" href=\"#\">"));
        assert!(main.contains("href=\"pages/expenses.html\">Expenses"));
    }

    #[test]
    fn test_expenses_page_lists_every_expense_escaped() {
        let html = render_expenses_page(&report(), &options());

        assert!(html.contains("<td>&lt;b&gt;Pizza&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>Pizza</b>"));
        assert!(html.contains("<tr class=\"table-dark\">\n<td>Diesel</td>"));
        assert!(html.contains("<tr class=\"table-secondary\">\n<td>&lt;b&gt;Pizza"));
        assert!(html.contains("title=\"Not assigned to any person\">Eve</td>"));
    }

    #[test]
    fn test_result_page_balances() {
        let html = render_result_page(&report(), &options());

        assert!(html.contains("<td>Alice</td>\n<td class=\"text-danger text-end\">-$20.00</td>"));
        assert!(html.contains("<td>Bob</td>\n<td class=\"text-success text-end\">$20.00</td>"));
    }

    #[test]
    fn test_local_assets() {
        let mut opts = options();
        opts.assets = AssetSource::Local(PathBuf::from("/srv/assets"));
        let html = render_result_page(&report(), &opts);

        assert!(html.contains("href=\"/srv/assets/bootstrap.css\""));
        assert!(html.contains("<script src=\"/srv/assets/jquery.js\"></script>"));
        assert!(!html.contains("cdn.jsdelivr"));
    }

    #[test]
    fn test_generate_site_writes_three_pages() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::new(temp_dir.path());
        let report = report();

        let written = generate_site(&report, &options(), &paths).unwrap();

        assert_eq!(written.len(), 3);
        assert!(paths.main_page().is_file());
        assert!(paths.expenses_page().is_file());
        assert!(paths.result_page().is_file());

        let first = fs::read_to_string(paths.main_page()).unwrap();
        generate_site(&report, &options(), &paths).unwrap();
        let second = fs::read_to_string(paths.main_page()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
