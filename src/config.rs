use std::path::PathBuf;

use crate::browser::DEFAULT_PAGE_SIZE;

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and
    /// `washington.csv`.
    pub data_dir: PathBuf,
    /// Records shown per page by the record browser.
    pub page_size: usize,
}

impl Settings {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(".")
    }
}
