//! Category segmentation of reconstructed listing lines
//!
//! Listings are partitioned by category header lines. Two header shapes
//! appear in the source documents: an explicit `GRUPO: <name>` marker and a
//! bare `<code> - <label>` section line. Every product line is filed under
//! the most recently opened category.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rows::normalize_whitespace;
use super::tokens::tokenize_record;
use super::types::GroupedRecords;

/// Explicit header: `GRUPO: <name>`, case-insensitive marker. The category
/// name is everything after the colon.
static RE_GROUP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^GRUPO:\s*(.+)$").expect("valid group marker regex"));

/// Bare header: `<digits> - <label>` spanning the whole line. The category
/// name is the line itself.
static RE_GROUP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*-\s*.+$").expect("valid group code regex"));

/// Segmentation accumulator: the currently open category plus the buckets
/// filled so far. Threaded through line processing as a fold, so two
/// documents can be segmented concurrently without shared state.
#[derive(Debug, Default)]
struct SegmentState {
    current: Option<String>,
    groups: GroupedRecords,
}

impl SegmentState {
    fn push_line(&mut self, line: &str) {
        if let Some(name) = match_group_header(line) {
            // Re-encountered headers re-open the existing bucket.
            self.groups.entry(name.clone()).or_default();
            self.current = Some(name);
            return;
        }

        // Lines before the first header have nowhere to go and are dropped.
        let Some(category) = self.current.clone() else {
            return;
        };

        let records = tokenize_record(line, &category);
        if !records.is_empty() {
            self.groups.entry(category).or_default().extend(records);
        }
    }
}

/// Recognize a category header line. Patterns are tried in order and the
/// first match wins; the returned name is normalized.
pub fn match_group_header(line: &str) -> Option<String> {
    if let Some(caps) = RE_GROUP_MARKER.captures(line) {
        return Some(normalize_whitespace(&caps[1]));
    }
    if RE_GROUP_CODE.is_match(line) {
        return Some(normalize_whitespace(line));
    }
    None
}

/// Partition normalized, non-empty lines into category buckets, tokenizing
/// product records as they are filed. Input order is document order and is
/// preserved within each bucket.
pub fn group_records<'a, I>(lines: I) -> GroupedRecords
where
    I: IntoIterator<Item = &'a str>,
{
    let state = lines
        .into_iter()
        .fold(SegmentState::default(), |mut state, line| {
            state.push_line(line);
            state
        });
    state.groups
}
