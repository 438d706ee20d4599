use crate::app_config::{
    AppConfig, DEFAULT_EXPORT_BASE_URL, DEFAULT_OUTPUT_PATH, DEFAULT_SHEET_ID, DEFAULT_TAB_GID,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce the fixed sheet, tab and
/// output path the feed has always used.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sheet_id = non_empty("CLEARANCE_SHEET_ID", DEFAULT_SHEET_ID)?;
    let tab_gid = non_empty("CLEARANCE_TAB_GID", DEFAULT_TAB_GID)?;
    let output_path = PathBuf::from(non_empty("CLEARANCE_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?);
    let log_level = or_default("CLEARANCE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("CLEARANCE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "CLEARANCE_USER_AGENT",
        "clearance-feed/0.1 (inventory-export)",
    );
    let export_base_url = non_empty("CLEARANCE_EXPORT_BASE_URL", DEFAULT_EXPORT_BASE_URL)?;

    Ok(AppConfig {
        sheet_id,
        tab_gid,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        export_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
