use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    #[error("invalid sheet URL for sheet \"{sheet_id}\": {reason}")]
    InvalidSheetUrl { sheet_id: String, reason: String },
}
