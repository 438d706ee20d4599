//! The `update` run: fetch the clearance tab, parse it, write the feed.
//!
//! A failed fetch aborts the run before anything is written, which surfaces
//! as a non-zero exit from `main`. A sheet without a header row is not an
//! error: the feed is still written, with zero products.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use clearance_core::{AppConfig, ClearanceFeed};
use clearance_scraper::{parse_clearance_sheet, SheetClient};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UpdateOptions {
    /// Overrides the configured output path.
    pub(crate) output: Option<PathBuf>,
    pub(crate) dry_run: bool,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpdateSummary {
    pub(crate) product_count: usize,
    pub(crate) header_found: bool,
    /// `None` on a dry run.
    pub(crate) written_to: Option<PathBuf>,
}

/// Runs one fetch-parse-write cycle.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the sheet could not
/// be fetched, or the feed cannot be serialized or written.
pub(crate) async fn run_update(
    config: &AppConfig,
    options: &UpdateOptions,
) -> anyhow::Result<UpdateSummary> {
    tracing::info!(started_at = %Utc::now().to_rfc3339(), "starting clearance update");

    let client = SheetClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.export_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build sheet client: {e}"))?;

    tracing::info!(gid = %config.tab_gid, "fetching clearance data");
    let Some(csv_content) = client.fetch_tab(&config.sheet_id, &config.tab_gid).await else {
        anyhow::bail!("failed to fetch clearance data");
    };

    let parsed = parse_clearance_sheet(&csv_content);
    let with_spec_sheet = parsed
        .products
        .iter()
        .filter(|p| p.has_spec_sheet())
        .count();
    tracing::info!(
        count = parsed.products.len(),
        categories = parsed.category_rows,
        skipped = parsed.skipped_rows,
        with_spec_sheet,
        "parsed clearance products"
    );
    let header_found = parsed.header_found();

    let feed = ClearanceFeed::new(parsed.products, Utc::now());
    let json = feed
        .to_pretty_json()
        .context("failed to serialize clearance feed")?;

    let written_to = if options.dry_run {
        println!("{json}");
        None
    } else {
        let path = options.output.as_deref().unwrap_or(&config.output_path);
        write_feed(path, &json)?;
        tracing::info!(path = %path.display(), "wrote clearance feed");
        Some(path.to_path_buf())
    };

    Ok(UpdateSummary {
        product_count: feed.product_count(),
        header_found,
        written_to,
    })
}

/// Overwrites `path` with `json`.
fn write_feed(path: &Path, json: &str) -> anyhow::Result<()> {
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
