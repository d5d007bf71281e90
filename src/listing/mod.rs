//! Inventory listing reconstruction
//!
//! Rebuilds product records from a PDF listing's positioned text: fragments
//! are clustered into visual rows, rows become normalized lines, lines are
//! partitioned by category header, and product lines are tokenized into
//! records. The whole pipeline is pure and synchronous; PDF decoding and
//! HTTP concerns live elsewhere.

mod groups;
mod rows;
mod tokens;
mod types;

pub use groups::{group_records, match_group_header};
pub use rows::{normalize_whitespace, page_lines, DEFAULT_ROW_TOLERANCE};
pub use tokens::{parse_decimal_br, tokenize_record};
pub use types::{GroupedRecords, PageText, ProductRecord, TextFragment};

/// Reconstruct the document's full line sequence. Each page contributes its
/// lines top-to-bottom, followed by one blank line as the page boundary
/// marker.
pub fn document_lines(pages: &[PageText], tolerance: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        lines.extend(page_lines(&page.fragments, tolerance));
        lines.push(String::new());
    }
    lines
}

/// Extract category-grouped product records from a document's positioned
/// text. Identical input yields identical output, including serialized key
/// order.
pub fn extract_grouped_records(pages: &[PageText], tolerance: f32) -> GroupedRecords {
    let lines = document_lines(pages, tolerance);
    group_records(lines.iter().filter(|l| !l.is_empty()).map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(fragments: Vec<(f32, f32, &str)>) -> PageText {
        PageText {
            fragments: fragments
                .into_iter()
                .map(|(x, y, text)| TextFragment::new(x, y, text))
                .collect(),
        }
    }

    fn sample_pages() -> Vec<PageText> {
        vec![
            page(vec![
                (40.0, 700.0, "GRUPO: 10 - FERRAMENTAS"),
                (40.0, 680.0, "12345 MARTELO DE ACO"),
                (400.0, 680.5, "3,00"),
                (40.0, 660.0, "67890 CHAVE PHILLIPS 10"),
            ]),
            page(vec![
                (40.0, 700.0, "55555 ALICATE 1"),
                (40.0, 680.0, "20 - ELETRICA"),
                (40.0, 660.0, "33355 FITA ISOLANTE 5"),
            ]),
        ]
    }

    #[test]
    fn test_document_lines_insert_page_markers() {
        let lines = document_lines(&sample_pages(), DEFAULT_ROW_TOLERANCE);
        assert_eq!(
            lines,
            vec![
                "GRUPO: 10 - FERRAMENTAS",
                "12345 MARTELO DE ACO 3,00",
                "67890 CHAVE PHILLIPS 10",
                "",
                "55555 ALICATE 1",
                "20 - ELETRICA",
                "33355 FITA ISOLANTE 5",
                "",
            ]
        );
    }

    #[test]
    fn test_categories_persist_across_pages() {
        let groups = extract_grouped_records(&sample_pages(), DEFAULT_ROW_TOLERANCE);
        // 55555 opens page two before any new header, so it still belongs to
        // the category opened on page one.
        let ferramentas: Vec<&str> = groups["10 - FERRAMENTAS"]
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(ferramentas, vec!["12345", "67890", "55555"]);
        assert_eq!(groups["20 - ELETRICA"].len(), 1);
    }

    #[test]
    fn test_split_row_is_tokenized_as_one_record() {
        let groups = extract_grouped_records(&sample_pages(), DEFAULT_ROW_TOLERANCE);
        let martelo = &groups["10 - FERRAMENTAS"][0];
        assert_eq!(martelo.code, "12345");
        assert_eq!(martelo.description, "MARTELO DE ACO");
        assert_eq!(martelo.quantity, 3);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let pages = sample_pages();
        let first = extract_grouped_records(&pages, DEFAULT_ROW_TOLERANCE);
        let second = extract_grouped_records(&pages, DEFAULT_ROW_TOLERANCE);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_document_yields_empty_groups() {
        assert!(extract_grouped_records(&[], DEFAULT_ROW_TOLERANCE).is_empty());
        assert!(extract_grouped_records(&[PageText::default()], DEFAULT_ROW_TOLERANCE).is_empty());
    }
}
