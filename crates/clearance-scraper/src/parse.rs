//! Low-level cell helpers used while turning sheet rows into products.
//!
//! Nothing in here fails: malformed input degrades to `0` or an empty string
//! so that every product field is always present.

/// Marker the sheet shows when a spec-sheet lookup formula found nothing.
const NOT_AVAILABLE: &str = "#N/A";

/// First code point of every run of ten Unicode decimal digits (category
/// `Nd`, Unicode 14). Each run holds the digits 0 through 9 in order.
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6,
    0xD66, 0xDE6, 0xE50, 0xED0, 0xF20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Maps any Unicode decimal digit to its ASCII form, e.g. `'１'` to `'1'`.
fn ascii_digit(c: char) -> Option<char> {
    let cp = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find_map(|&zero| cp.checked_sub(zero).and_then(|d| char::from_digit(d, 10)))
}

/// Parses a quantity cell.
///
/// Commas and all whitespace are stripped before parsing, so `"1,234"` and
/// `" 42 "` both parse. Decimal digits from any script count (`"１２"` is
/// `12`), and a single `_` between two digits is a group separator
/// (`"1_000"`). Anything that is still not an integer (including an empty
/// cell or a misplaced `_`) yields `0`.
#[must_use]
pub fn parse_int(value: &str) -> i64 {
    let chars: Vec<char> = value
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect();

    let mut cleaned = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            cleaned.push(c);
            continue;
        }
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if !between_digits {
            return 0;
        }
    }
    cleaned.parse::<i64>().unwrap_or(0)
}

/// Returns the trimmed cell at `idx`, or `""` when the row is too short.
#[must_use]
pub(crate) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", |c| c.trim())
}

/// Parses the quantity cell at `idx`; a missing cell counts as `0`.
#[must_use]
pub(crate) fn quantity(row: &[String], idx: usize) -> i64 {
    row.get(idx).map_or(0, |c| parse_int(c))
}

/// Collapses embedded newlines in a multi-line label to single spaces.
#[must_use]
pub(crate) fn collapse_label(label: &str) -> String {
    label.replace('\n', " ").trim().to_owned()
}

/// Keeps a spec-sheet cell only if it holds an `http` link.
///
/// Blank cells, `#N/A` and any other placeholder text become `""`.
#[must_use]
pub(crate) fn clean_spec_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE || !raw.starts_with("http") {
        return String::new();
    }
    raw.to_owned()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
