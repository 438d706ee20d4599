//! HTTP client for Google Sheets' CSV export endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;

const DEFAULT_BASE_URL: &str = "https://docs.google.com";

/// Client that downloads one spreadsheet tab as CSV.
///
/// A single GET is issued per fetch. Failures are not retried; the caller
/// either gets the body or a typed [`ScraperError`]. Use
/// [`SheetClient::fetch_tab`] for the log-and-give-up behaviour the update
/// run wants.
pub struct SheetClient {
    client: Client,
    base_url: Url,
}

impl SheetClient {
    /// Creates a client pointed at `docs.google.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidSheetUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ScraperError::InvalidSheetUrl {
            sheet_id: String::new(),
            reason: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches a tab as CSV text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidSheetUrl`] if the sheet id is blank.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::EmptyBody`] if the export came back empty.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub async fn fetch_tab_csv(&self, sheet_id: &str, gid: &str) -> Result<String, ScraperError> {
        let url = self.export_url(sheet_id, gid)?;

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(ScraperError::EmptyBody {
                url: url.to_string(),
            });
        }

        Ok(body)
    }

    /// Fetches a tab as CSV text, logging and swallowing any failure.
    ///
    /// Returns `None` when there is no data to parse. Never errors.
    pub async fn fetch_tab(&self, sheet_id: &str, gid: &str) -> Option<String> {
        match self.fetch_tab_csv(sheet_id, gid).await {
            Ok(body) => {
                tracing::debug!(sheet_id, gid, bytes = body.len(), "fetched sheet tab");
                Some(body)
            }
            Err(e) => {
                tracing::error!(sheet_id, gid, error = %e, "error fetching sheet tab");
                None
            }
        }
    }

    /// Builds the CSV export URL for `sheet_id` / `gid`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSheetUrl`] if the sheet id is blank or
    /// the resulting URL cannot be parsed.
    pub fn export_url(&self, sheet_id: &str, gid: &str) -> Result<Url, ScraperError> {
        let sheet_id = sheet_id.trim();
        if sheet_id.is_empty() {
            return Err(ScraperError::InvalidSheetUrl {
                sheet_id: sheet_id.to_owned(),
                reason: "sheet id is empty".into(),
            });
        }

        let mut url = self
            .base_url
            .join(&format!("spreadsheets/d/{sheet_id}/export"))
            .map_err(|e| ScraperError::InvalidSheetUrl {
                sheet_id: sheet_id.to_owned(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("gid", gid.trim());

        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
