//! Core types for reconstructed inventory listings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One positioned text run from a PDF page's text layer.
///
/// Coordinates are in PDF text space with y increasing upward, so a larger
/// `y` sits higher on the page. The extraction adapter is responsible for
/// converting from whatever the decoding library reports.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Horizontal position (left edge of the run)
    pub x: f32,

    /// Vertical position
    pub y: f32,

    /// Literal text content, unnormalized
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// All text fragments found on one page, in no particular order.
#[derive(Debug, Clone, Default)]
pub struct PageText {
    pub fragments: Vec<TextFragment>,
}

/// One product entry parsed from a listing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product code, three or more decimal digits. Identity is exact string
    /// equality, so leading zeros are significant.
    pub code: String,

    /// Freeform description text
    pub description: String,

    /// Stock quantity, rounded from the listing's decimal value
    pub quantity: i64,

    /// Name of the category the record was filed under
    pub category: String,
}

/// Category name to ordered record list, for one document.
///
/// Record order within a category is document order. The sorted key order
/// makes serialized output deterministic for identical input.
pub type GroupedRecords = BTreeMap<String, Vec<ProductRecord>>;
