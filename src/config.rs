use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "hours.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "pay.txt";

/// The two title lines printed above the pay lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: String,
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self {
            title: "YOUR NAME".to_string(),
            subtitle: "PAY FOR THIS WEEK".to_string(),
        }
    }
}

/// Where the report is read from and written to.
///
/// The binary always runs with `ReportConfig::default()`; explicit paths exist
/// so the engine can be pointed at a scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub header: ReportHeader,
}

impl ReportConfig {
    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            header: ReportHeader::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::with_paths(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
