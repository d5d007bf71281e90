//! Row reconstruction from positioned text fragments
//!
//! PDF text layers expose an unordered bag of positioned runs with no row
//! or column structure. This module rebuilds visual lines by clustering
//! fragments on vertical position, then reading each cluster left to right.

use super::types::TextFragment;

/// Vertical distance (PDF units) within which fragments are considered to
/// lie on the same visual line.
pub const DEFAULT_ROW_TOLERANCE: f32 = 4.0;

/// A visual line under construction: member fragments plus the running mean
/// of their vertical coordinates.
struct Row<'a> {
    y: f32,
    members: Vec<&'a TextFragment>,
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reconstruct one page's text lines from its positioned fragments.
///
/// Fragments are sorted top-to-bottom (descending y, ties broken by
/// ascending x) and clustered greedily: each fragment joins the first open
/// row whose running mean y is within `tolerance` (inclusive), otherwise it
/// seeds a new row. Rows are then emitted top-to-bottom with their fragments
/// joined left-to-right, normalized; rows that normalize to nothing are
/// dropped.
pub fn page_lines(fragments: &[TextFragment], tolerance: f32) -> Vec<String> {
    let mut ordered: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .collect();
    ordered.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    // Greedy first-fit: rows are tested in creation order and the first one
    // within tolerance wins, not the nearest one.
    let mut rows: Vec<Row> = Vec::new();
    for fragment in ordered {
        match rows
            .iter_mut()
            .find(|row| (row.y - fragment.y).abs() <= tolerance)
        {
            Some(row) => {
                // n counts members before this fragment joins, keeping y the
                // exact mean over all members.
                let n = row.members.len() as f32;
                row.y = (row.y * n + fragment.y) / (n + 1.0);
                row.members.push(fragment);
            }
            None => rows.push(Row {
                y: fragment.y,
                members: vec![fragment],
            }),
        }
    }

    rows.sort_by(|a, b| b.y.total_cmp(&a.y));

    rows.into_iter()
        .filter_map(|mut row| {
            row.members.sort_by(|a, b| a.x.total_cmp(&b.x));
            let joined = row
                .members
                .iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let line = normalize_whitespace(&joined);
            (!line.is_empty()).then_some(line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(x: f32, y: f32, text: &str) -> TextFragment {
        TextFragment::new(x, y, text)
    }

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize_whitespace("  a   b \t c  "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_whitespace("  GRUPO:   10 -  FERRAMENTAS ");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn test_fragments_within_tolerance_share_row() {
        let fragments = vec![frag(10.0, 100.0, "left"), frag(200.0, 103.0, "right")];
        assert_eq!(page_lines(&fragments, 4.0), vec!["left right"]);
    }

    #[test]
    fn test_fragments_beyond_tolerance_split_rows() {
        let fragments = vec![frag(10.0, 100.0, "upper"), frag(10.0, 105.0, "lower")];
        assert_eq!(page_lines(&fragments, 4.0), vec!["upper", "lower"]);
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let fragments = vec![frag(10.0, 104.0, "a"), frag(50.0, 100.0, "b")];
        assert_eq!(page_lines(&fragments, 4.0), vec!["a b"]);
    }

    #[test]
    fn test_row_mean_drifts_toward_members() {
        // 96.5 pulls the mean down to 98.25, which keeps 94.3 in reach;
        // against the seed alone (|100.0 - 94.3| = 5.7) it would have split.
        let fragments = vec![
            frag(10.0, 100.0, "a"),
            frag(20.0, 96.5, "b"),
            frag(30.0, 94.3, "c"),
        ];
        assert_eq!(page_lines(&fragments, 4.0), vec!["a b c"]);
    }

    #[test]
    fn test_row_text_ordered_by_x() {
        let fragments = vec![
            frag(300.0, 100.0, "3,00"),
            frag(10.0, 100.5, "12345"),
            frag(80.0, 99.5, "MARTELO"),
        ];
        assert_eq!(page_lines(&fragments, 4.0), vec!["12345 MARTELO 3,00"]);
    }

    #[test]
    fn test_rows_emitted_top_to_bottom() {
        let fragments = vec![
            frag(10.0, 50.0, "bottom"),
            frag(10.0, 700.0, "top"),
            frag(10.0, 400.0, "middle"),
        ];
        assert_eq!(page_lines(&fragments, 4.0), vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_blank_fragments_contribute_nothing() {
        let fragments = vec![frag(10.0, 100.0, "   "), frag(10.0, 200.0, "\t")];
        assert!(page_lines(&fragments, 4.0).is_empty());
    }

    #[test]
    fn test_empty_page() {
        assert!(page_lines(&[], 4.0).is_empty());
    }
}
