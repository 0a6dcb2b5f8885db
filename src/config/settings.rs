//! Run options for the cost splitter
//!
//! Collects what the command line asks for (input file, culture and which
//! outputs to produce) and validates it before any work is done.

use std::path::{Path, PathBuf};

use super::paths::{local_asset_files, ReportPaths};
use crate::display::{CurrencyFormat, DEFAULT_CULTURE};
use crate::error::{SplitterError, SplitterResult};

/// Where the HTML pages load their stylesheet and scripts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Public CDN links
    Cdn,
    /// A local directory holding the asset files
    Local(PathBuf),
}

/// Options for one run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Input document describing the project
    pub input_path: PathBuf,

    /// Culture used for currency formatting
    pub culture: String,

    /// Write the HTML site
    pub generate_html: bool,

    /// Where to write the HTML site (current directory if unset)
    pub html_target_path: Option<PathBuf>,

    /// Load stylesheet and scripts from a local directory
    pub use_local_assets: bool,

    /// Directory with the local asset files
    pub local_assets_path: Option<PathBuf>,

    /// Print the report to the console
    pub output_to_console: bool,

    /// Include per-person category details in the console report
    pub print_category_details: bool,

    /// Write the final balances as CSV
    pub export_csv: Option<PathBuf>,

    /// Emit ANSI colors on the console
    pub use_color: bool,
}

impl ReportOptions {
    /// Create options for an input file with everything else defaulted
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            culture: DEFAULT_CULTURE.to_string(),
            generate_html: false,
            html_target_path: None,
            use_local_assets: false,
            local_assets_path: None,
            output_to_console: false,
            print_category_details: false,
            export_csv: None,
            use_color: true,
        }
    }

    /// Check the options before anything is read or written
    ///
    /// Verifies the input file and any local asset files exist and that the
    /// culture is known.
    pub fn validate(&self) -> SplitterResult<()> {
        ensure_file(&self.input_path)?;

        if self.use_local_assets {
            let dir = self.local_assets_path.as_deref().ok_or_else(|| {
                SplitterError::Validation(
                    "local assets requested but no asset directory given".into(),
                )
            })?;
            for file in local_asset_files(dir) {
                ensure_file(&file)?;
            }
        }

        self.currency_format()?;
        Ok(())
    }

    /// Resolve the currency format for the configured culture
    pub fn currency_format(&self) -> SplitterResult<CurrencyFormat> {
        CurrencyFormat::for_culture(&self.culture)
    }

    /// Resolve the HTML output paths, defaulting to the current directory
    pub fn report_paths(&self) -> SplitterResult<ReportPaths> {
        let target = match &self.html_target_path {
            Some(path) => path.clone(),
            None => std::env::current_dir().map_err(|e| SplitterError::io(".", e))?,
        };
        Ok(ReportPaths::new(target))
    }

    /// Resolve where HTML pages load assets from
    ///
    /// Local directories are made absolute so every page can reach them
    /// regardless of its own depth.
    pub fn asset_source(&self) -> SplitterResult<AssetSource> {
        match (self.use_local_assets, &self.local_assets_path) {
            (true, Some(dir)) => {
                let absolute = dir.canonicalize().map_err(|e| SplitterError::io(dir, e))?;
                Ok(AssetSource::Local(absolute))
            }
            (true, None) => Err(SplitterError::Validation(
                "local assets requested but no asset directory given".into(),
            )),
            (false, _) => Ok(AssetSource::Cdn),
        }
    }

    /// Whether the console report should be printed
    ///
    /// With no output requested at all the console report is the fallback.
    pub fn wants_console(&self) -> bool {
        self.output_to_console || (!self.generate_html && self.export_csv.is_none())
    }
}

fn ensure_file(path: &Path) -> SplitterResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SplitterError::Validation(format!(
            "Could not find file '{}'",
            path.display()
        )))
    }
}
