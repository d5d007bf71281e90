//! Record tokenization for reconstructed listing lines
//!
//! A listing line carries a leading numeric product code, a freeform
//! description, and usually a trailing stock quantity in pt-BR decimal
//! format. Columns are gone by the time the line is reconstructed, so the
//! quantity is recovered by scanning tokens from the end of the line.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ProductRecord;

/// Product codes are three or more decimal digits, nothing else.
static RE_PRODUCT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid product code regex"));

/// Quantity tokens: digits with an optional decimal comma, e.g. `3`, `3,00`.
static RE_QUANTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(,\d+)?$").expect("valid quantity regex"));

/// Parse a pt-BR formatted number: periods are thousands separators and the
/// comma is the decimal separator, so `1.234,56` reads as 1234.56.
pub fn parse_decimal_br(text: &str) -> Option<f64> {
    text.replace('.', "").replace(',', ".").parse().ok()
}

/// Parse one normalized line into product records for the given category.
///
/// Returns at most one record today; the list return leaves room for lines
/// that carry several. Lines whose first token is not a product code yield
/// nothing. The quantity is the last token matching the quantity pattern
/// (scanned backward, the code itself is never reconsidered), removed from
/// the line and rounded to the nearest integer; lines with no such token get
/// quantity 0. Everything left after the code is the description.
///
/// A description that itself ends in a standalone number is misread as the
/// quantity when no real quantity follows it; accepted limit of the
/// backward scan.
pub fn tokenize_record(line: &str, category: &str) -> Vec<ProductRecord> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();

    let code = match tokens.first() {
        Some(first) if RE_PRODUCT_CODE.is_match(first) => (*first).to_string(),
        _ => return Vec::new(),
    };

    let mut quantity = 0i64;
    for i in (1..tokens.len()).rev() {
        if RE_QUANTITY.is_match(tokens[i]) {
            quantity = parse_decimal_br(tokens[i])
                .map(|value| value.round() as i64)
                .unwrap_or(0);
            tokens.remove(i);
            break;
        }
    }

    let description = tokens[1..].join(" ");

    vec![ProductRecord {
        code,
        description,
        quantity,
        category: category.to_string(),
    }]
}
