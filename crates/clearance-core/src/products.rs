use serde::{Deserialize, Serialize};

/// One clearance line item, normalized from a row of the inventory sheet.
///
/// Field order matches the JSON the frontend reads; every field is always
/// present, with empty strings and zero quantities standing in for missing
/// cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Item number from the SKU column. Never empty.
    pub sku: String,
    pub description: String,
    /// Wattage as written in the sheet, e.g. `"150W"` or `"100/150/200W"`.
    pub wattage: String,
    /// Canonical display category (e.g. `"Area Light"`), or the raw label
    /// when no alias matched.
    pub category: String,
    /// Label of the most recent subcategory row; empty directly after a
    /// category header.
    pub subcategory: String,
    pub ontario: i64,
    pub louisville: i64,
    pub phoenix: i64,
    pub dallas: i64,
    pub chicago: i64,
    /// Total as reported by the sheet. Not recomputed from the locations.
    pub total: i64,
    pub notes: String,
    /// Link to the spec sheet, or empty when the cell held no `http` URL.
    pub spec_url: String,
}

impl Product {
    #[must_use]
    pub fn has_spec_sheet(&self) -> bool {
        !self.spec_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            sku: "AL2-100".to_owned(),
            description: "Area light 100W".to_owned(),
            wattage: "100W".to_owned(),
            category: "Area Light".to_owned(),
            subcategory: String::new(),
            ontario: 1,
            louisville: 2,
            phoenix: 3,
            dallas: 4,
            chicago: 5,
            total: 15,
            notes: String::new(),
            spec_url: "https://example.com/al2.pdf".to_owned(),
        }
    }

    #[test]
    fn has_spec_sheet_reflects_spec_url() {
        assert!(sample().has_spec_sheet());
        let product = Product {
            spec_url: String::new(),
            ..sample()
        };
        assert!(!product.has_spec_sheet());
    }

    #[test]
    fn serializes_with_frontend_field_names_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"sku\"",
            "\"description\"",
            "\"wattage\"",
            "\"category\"",
            "\"subcategory\"",
            "\"ontario\"",
            "\"louisville\"",
            "\"phoenix\"",
            "\"dallas\"",
            "\"chicago\"",
            "\"total\"",
            "\"notes\"",
            "\"spec_url\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(k).unwrap_or_else(|| panic!("missing key {k}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "keys out of order in {json}"
        );
    }
}
