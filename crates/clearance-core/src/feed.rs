//! The JSON document the static frontend reads.
//!
//! Shape:
//!
//! ```json
//! {
//!   "updated_at": "2026-10-15T11:30:00.123456+00:00",
//!   "updated_at_pacific": "October 15, 2026",
//!   "tabs": { "clearance": { "name": "Clearance Stock", "products": [], "count": 0 } }
//! }
//! ```
//!
//! `updated_at_pacific` is formatted from the UTC timestamp, not converted to
//! Pacific time. The frontend has always received it that way, so the value
//! is kept as-is.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Display label for the clearance tab.
pub const CLEARANCE_TAB_NAME: &str = "Clearance Stock";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceFeed {
    /// RFC 3339 timestamp with microseconds and a `+00:00` offset.
    pub updated_at: String,
    /// Human-readable date, e.g. `"October 15, 2026"`.
    pub updated_at_pacific: String,
    pub tabs: FeedTabs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTabs {
    pub clearance: FeedTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTab {
    pub name: String,
    pub products: Vec<Product>,
    pub count: usize,
}

impl FeedTab {
    #[must_use]
    pub fn new(name: &str, products: Vec<Product>) -> Self {
        let count = products.len();
        Self {
            name: name.to_owned(),
            products,
            count,
        }
    }
}

impl ClearanceFeed {
    /// Wraps the parsed products into a feed stamped with `generated_at`.
    #[must_use]
    pub fn new(products: Vec<Product>, generated_at: DateTime<Utc>) -> Self {
        Self {
            updated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            updated_at_pacific: generated_at.format("%B %d, %Y").to_string(),
            tabs: FeedTabs {
                clearance: FeedTab::new(CLEARANCE_TAB_NAME, products),
            },
        }
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.tabs.clearance.count
    }

    /// Serializes the feed as pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
