//! Per-category comparison of two grouped listings
//!
//! Products are matched by exact code equality only. The result carries the
//! raw per-side aggregates plus, for every category in either document, the
//! records missing from the other side.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::listing::{GroupedRecords, ProductRecord};

/// Outcome of comparing a source listing against a destination listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Union of both documents' category names, sorted
    pub categories: Vec<String>,

    /// Raw aggregate extracted from the source document
    pub source_records: GroupedRecords,

    /// Raw aggregate extracted from the destination document
    pub dest_records: GroupedRecords,

    /// Per category, source records whose code is absent at the destination
    pub missing_at_dest: BTreeMap<String, Vec<ProductRecord>>,

    /// Per category, destination records whose code is absent at the source
    pub missing_at_source: BTreeMap<String, Vec<ProductRecord>>,
}

/// Compare two grouped listings category by category.
///
/// Every category from either side gets an entry in both missing maps,
/// possibly empty. Record order inside the missing lists is the order of
/// the side the records came from. Duplicate codes on one side collapse to
/// simple presence, so they never produce duplicate missing entries for the
/// other side.
pub fn diff(source: GroupedRecords, dest: GroupedRecords) -> ComparisonResult {
    let categories: Vec<String> = source
        .keys()
        .chain(dest.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut missing_at_dest = BTreeMap::new();
    let mut missing_at_source = BTreeMap::new();

    for category in &categories {
        let source_side = source.get(category).map(Vec::as_slice).unwrap_or(&[]);
        let dest_side = dest.get(category).map(Vec::as_slice).unwrap_or(&[]);

        missing_at_dest.insert(category.clone(), absent_from(source_side, dest_side));
        missing_at_source.insert(category.clone(), absent_from(dest_side, source_side));
    }

    ComparisonResult {
        categories,
        source_records: source,
        dest_records: dest,
        missing_at_dest,
        missing_at_source,
    }
}

/// Records from `records` whose code does not appear in `other`, in their
/// original order.
fn absent_from(records: &[ProductRecord], other: &[ProductRecord]) -> Vec<ProductRecord> {
    let present: HashSet<&str> = other.iter().map(|r| r.code.as_str()).collect();
    records
        .iter()
        .filter(|r| !present.contains(r.code.as_str()))
        .cloned()
        .collect()
}
