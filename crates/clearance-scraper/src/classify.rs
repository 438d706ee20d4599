//! Classification of data rows below the sheet header.
//!
//! The sheet encodes a two-level hierarchy through its first column: a row
//! with a label and no SKU opens a new category, a row with both a label and a
//! SKU opens a subcategory and is itself a product, and a row with only a SKU
//! is a product under whatever labels came before it.

use crate::parse::{cell, collapse_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Blank separator, or a row too short to carry a SKU column.
    Skip,
    /// Label with no SKU: starts a new top-level category.
    CategoryHeader { label: String },
    /// Label and SKU: starts a new subcategory and describes a product.
    SubcategoryProduct { label: String, sku: String },
    /// SKU with an empty label column.
    ProductOnly { sku: String },
}

/// Classifies one data row by which of its first two cells are populated.
///
/// Labels are returned with embedded newlines collapsed to spaces.
#[must_use]
pub fn classify_row(row: &[String]) -> RowKind {
    if row.len() < 2 {
        return RowKind::Skip;
    }

    let first_col = cell(row, 0);
    let sku_col = cell(row, 1);

    match (first_col.is_empty(), sku_col.is_empty()) {
        (true, true) => RowKind::Skip,
        (false, true) => RowKind::CategoryHeader {
            label: collapse_label(first_col),
        },
        (false, false) => RowKind::SubcategoryProduct {
            label: collapse_label(first_col),
            sku: sku_col.to_owned(),
        },
        (true, false) => RowKind::ProductOnly {
            sku: sku_col.to_owned(),
        },
    }
}
