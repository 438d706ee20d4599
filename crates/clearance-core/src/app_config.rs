use std::path::PathBuf;

/// Sheet that holds the clearance inventory report.
pub const DEFAULT_SHEET_ID: &str = "1XwA4sOwRhb6z9jZ7XyEYUFFM04R0AzWBxKo0d4hJjMM";

/// The clearance report lives on the first tab of the sheet.
pub const DEFAULT_TAB_GID: &str = "0";

pub const DEFAULT_OUTPUT_PATH: &str = "clearance_data.json";

pub const DEFAULT_EXPORT_BASE_URL: &str = "https://docs.google.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub sheet_id: String,
    pub tab_gid: String,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Origin the CSV export URL is built against. Overridden in tests to
    /// point at a local mock server.
    pub export_base_url: String,
}
