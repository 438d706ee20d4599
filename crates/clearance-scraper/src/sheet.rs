//! Parsing of the clearance sheet's CSV export into [`Product`] records.
//!
//! Column layout below the header row (0-based):
//!
//! | col | content |
//! |---|---|
//! | 0 | category / subcategory label |
//! | 1 | SKU |
//! | 2 | description |
//! | 3 | wattage |
//! | 4..=8 | Ontario, Louisville, Phoenix, Dallas, Chicago quantities |
//! | 9 | total quantity |
//! | 10 | notes |
//! | 11 | spec-sheet URL |

use clearance_core::Product;

use crate::category::map_category;
use crate::classify::{classify_row, RowKind};
use crate::parse::{cell, clean_spec_url, quantity};

/// Substring of the SKU column heading; matches both `"Item#"` and
/// `"Item# / SKU"`.
pub const HEADER_MARKER: &str = "Item#";

const COL_DESCRIPTION: usize = 2;
const COL_WATTAGE: usize = 3;
const COL_ONTARIO: usize = 4;
const COL_LOUISVILLE: usize = 5;
const COL_PHOENIX: usize = 6;
const COL_DALLAS: usize = 7;
const COL_CHICAGO: usize = 8;
const COL_TOTAL: usize = 9;
const COL_NOTES: usize = 10;
const COL_SPEC_URL: usize = 11;

/// Outcome of parsing one sheet export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    pub products: Vec<Product>,
    /// Index of the header row, or `None` if the marker was never found.
    pub header_row: Option<usize>,
    /// Data rows classified as [`RowKind::Skip`].
    pub skipped_rows: usize,
    /// Category header rows seen below the header.
    pub category_rows: usize,
}

impl ParsedSheet {
    #[must_use]
    pub fn header_found(&self) -> bool {
        self.header_row.is_some()
    }
}

/// Category labels carried forward from one row to the next.
#[derive(Debug, Default)]
struct SheetCursor {
    current_category: String,
    current_subcategory: String,
}

impl SheetCursor {
    /// Updates the carried labels for `kind` and builds a product when the
    /// row has a SKU.
    fn apply(&mut self, kind: RowKind, row: &[String]) -> Option<Product> {
        let sku = match kind {
            RowKind::Skip => return None,
            RowKind::CategoryHeader { label } => {
                self.current_category = label;
                self.current_subcategory.clear();
                return None;
            }
            RowKind::SubcategoryProduct { label, sku } => {
                self.current_subcategory = label;
                sku
            }
            RowKind::ProductOnly { sku } => sku,
        };

        Some(self.product(sku, row))
    }

    fn category(&self) -> String {
        if self.current_category.is_empty() {
            map_category(&self.current_subcategory)
        } else {
            map_category(&self.current_category)
        }
    }

    fn product(&self, sku: String, row: &[String]) -> Product {
        Product {
            sku,
            description: cell(row, COL_DESCRIPTION).to_owned(),
            wattage: cell(row, COL_WATTAGE).to_owned(),
            category: self.category(),
            subcategory: self.current_subcategory.clone(),
            ontario: quantity(row, COL_ONTARIO),
            louisville: quantity(row, COL_LOUISVILLE),
            phoenix: quantity(row, COL_PHOENIX),
            dallas: quantity(row, COL_DALLAS),
            chicago: quantity(row, COL_CHICAGO),
            total: quantity(row, COL_TOTAL),
            notes: cell(row, COL_NOTES).to_owned(),
            spec_url: clean_spec_url(cell(row, COL_SPEC_URL)),
        }
    }
}

/// Splits CSV text into rows of cells.
///
/// Records may differ in length, and quoted cells may span lines. A record
/// the decoder rejects is logged and dropped.
#[must_use]
pub fn read_rows(csv_content: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    reader
        .records()
        .filter_map(|record| match record {
            Ok(rec) => Some(rec.iter().map(str::to_owned).collect::<Vec<String>>()),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed CSV record");
                None
            }
        })
        .collect()
}

/// Finds the first row whose second cell contains [`HEADER_MARKER`].
#[must_use]
pub fn find_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .position(|row| row.get(1).is_some_and(|c| c.contains(HEADER_MARKER)))
}

/// Parses rows that have already been split into cells.
#[must_use]
pub fn parse_rows(rows: &[Vec<String>]) -> ParsedSheet {
    let Some(header_idx) = find_header_row(rows) else {
        tracing::error!(marker = HEADER_MARKER, "could not find header row");
        return ParsedSheet::default();
    };

    let mut cursor = SheetCursor::default();
    let mut parsed = ParsedSheet {
        header_row: Some(header_idx),
        ..ParsedSheet::default()
    };

    for row in &rows[header_idx + 1..] {
        let kind = classify_row(row);
        match kind {
            RowKind::Skip => parsed.skipped_rows += 1,
            RowKind::CategoryHeader { ref label } => {
                tracing::debug!(category = %label, "category header");
                parsed.category_rows += 1;
            }
            RowKind::SubcategoryProduct { .. } | RowKind::ProductOnly { .. } => {}
        }
        if let Some(product) = cursor.apply(kind, row) {
            parsed.products.push(product);
        }
    }

    parsed
}

/// Parses a clearance sheet export, reporting header and row statistics.
#[must_use]
pub fn parse_clearance_sheet(csv_content: &str) -> ParsedSheet {
    parse_rows(&read_rows(csv_content))
}

/// Parses a clearance sheet export into products.
///
/// Returns an empty list (after logging an error) when the header row is
/// missing. Never fails.
#[must_use]
pub fn parse_clearance_csv(csv_content: &str) -> Vec<Product> {
    parse_clearance_sheet(csv_content).products
}

#[cfg(test)]
#[path = "sheet_test.rs"]
mod tests;
