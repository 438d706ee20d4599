pub mod category;
pub mod classify;
pub mod client;
pub mod error;
pub mod parse;
pub mod sheet;

pub use category::{map_category, CATEGORY_ALIASES};
pub use classify::{classify_row, RowKind};
pub use client::SheetClient;
pub use error::ScraperError;
pub use parse::parse_int;
pub use sheet::{parse_clearance_csv, parse_clearance_sheet, ParsedSheet};
