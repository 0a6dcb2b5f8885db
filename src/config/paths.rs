//! Path management for report output
//!
//! The HTML report is a small static site: `main.html` at the target
//! directory plus `pages/expenses.html` and `pages/result.html`. Local
//! stylesheet and script assets are looked up by fixed file names.

use std::path::{Path, PathBuf};

use crate::error::{SplitterError, SplitterResult};

/// Stylesheet expected in a local asset directory
pub const MAIN_CSS_FILE: &str = "bootstrap.css";
/// Bootstrap script expected in a local asset directory
pub const BOOTSTRAP_JS_FILE: &str = "bootstrap.js";
/// jQuery script expected in a local asset directory
pub const JQUERY_JS_FILE: &str = "jquery.js";

/// Locations of the generated HTML pages
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Directory the site is written to
    target_dir: PathBuf,
}

impl ReportPaths {
    /// Create paths rooted at the given target directory
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Get the target directory
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Get the directory holding the sub pages
    pub fn pages_dir(&self) -> PathBuf {
        self.target_dir.join("pages")
    }

    /// Get the path to the summary page
    pub fn main_page(&self) -> PathBuf {
        self.target_dir.join("main.html")
    }

    /// Get the path to the expense listing
    pub fn expenses_page(&self) -> PathBuf {
        self.pages_dir().join("expenses.html")
    }

    /// Get the path to the balance listing
    pub fn result_page(&self) -> PathBuf {
        self.pages_dir().join("result.html")
    }

    /// Ensure the target and pages directories exist
    pub fn ensure_directories(&self) -> SplitterResult<()> {
        let pages = self.pages_dir();
        std::fs::create_dir_all(&pages).map_err(|e| SplitterError::io(&pages, e))
    }
}

/// The asset files a local asset directory must contain
pub fn local_asset_files(dir: &Path) -> [PathBuf; 3] {
    [
        dir.join(MAIN_CSS_FILE),
        dir.join(BOOTSTRAP_JS_FILE),
        dir.join(JQUERY_JS_FILE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_page_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::new(temp_dir.path());

        assert_eq!(paths.target_dir(), temp_dir.path());
        assert_eq!(paths.main_page(), temp_dir.path().join("main.html"));
        assert_eq!(
            paths.expenses_page(),
            temp_dir.path().join("pages").join("expenses.html")
        );
        assert_eq!(
            paths.result_page(),
            temp_dir.path().join("pages").join("result.html")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::new(temp_dir.path().join("site"));

        paths.ensure_directories().unwrap();

        assert!(paths.pages_dir().is_dir());
    }

    #[test]
    fn test_local_asset_files() {
        let files = local_asset_files(Path::new("assets"));
        assert_eq!(files[0], Path::new("assets").join("bootstrap.css"));
        assert_eq!(files[2], Path::new("assets").join("jquery.js"));
    }
}
