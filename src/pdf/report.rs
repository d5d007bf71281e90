//! Transfer request document generation
//!
//! Renders the records a user selected from a comparison into a printable
//! A4 document: heading, generation timestamp, and a three-column table
//! (code, description, right-aligned quantity) repeated across pages.

use chrono::Local;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Layout constants (point units; depths measured down from the page top)
// ============================================================================

/// A4 page size in points
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;

/// Page margin, also the left edge of the code column
const MARGIN: f32 = 36.0;

const CODE_X: f32 = 40.0;
const DESC_X: f32 = 125.0;
/// Width budget for the description column; longer text is truncated
const DESC_WIDTH: f32 = 360.0;
const QTY_X: f32 = 490.0;
/// Quantity column width; values are right-aligned inside it
const QTY_WIDTH: f32 = 50.0;
/// Right edge of the rule under the column header
const RULE_RIGHT_X: f32 = 560.0;

const TITLE_SIZE: f32 = 18.0;
const STAMP_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 11.0;
const ROW_SIZE: f32 = 10.0;

/// Baseline depth of the title and timestamp on the first page
const TITLE_Y: f32 = 54.0;
const STAMP_Y: f32 = 72.0;
/// Column header depth on the first page
const HEADER_TOP_Y: f32 = 100.0;
/// Column header depth on continuation pages
const CONTINUATION_TOP_Y: f32 = 60.0;
/// Vertical distance between consecutive rows
const ROW_PITCH: f32 = 16.0;
/// A row past this depth moves to a fresh page instead
const PAGE_BREAK_Y: f32 = 780.0;

/// Average Helvetica glyph width as a fraction of the font size. Builtin
/// fonts expose no metrics, so centering, right alignment and truncation
/// all work from this approximation.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Heading used when the request carries no title.
pub const DEFAULT_TRANSFER_TITLE: &str = "Solicitação de Transferência";

// ============================================================================
// Types
// ============================================================================

/// One line item selected for a transfer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    /// Product code
    pub code: String,

    /// Freeform description
    pub description: String,

    /// Requested quantity
    #[serde(default)]
    pub quantity: i64,
}

/// Document generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to render transfer document: {0}")]
    Render(String),
}

impl From<printpdf::Error> for ReportError {
    fn from(e: printpdf::Error) -> Self {
        ReportError::Render(e.to_string())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the selected items into a finished PDF.
///
/// The title becomes both the document metadata title and the page heading.
/// The column header repeats at the top of every page; rows keep their
/// input order.
pub fn render_transfer_document(title: &str, items: &[TransferItem]) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    draw_centered(&layer, &font, title, TITLE_SIZE, TITLE_Y);
    let stamp = format!("Gerado em: {}", Local::now().format("%d/%m/%Y %H:%M:%S"));
    draw_centered(&layer, &font, &stamp, STAMP_SIZE, STAMP_Y);

    let mut y = draw_table_header(&layer, &font, HEADER_TOP_Y);

    for item in items {
        if y > PAGE_BREAK_Y {
            let (page, page_layer) = doc.add_page(
                Mm::from(Pt(PAGE_WIDTH)),
                Mm::from(Pt(PAGE_HEIGHT)),
                "Layer 1",
            );
            layer = doc.get_page(page).get_layer(page_layer);
            y = draw_table_header(&layer, &font, CONTINUATION_TOP_Y);
        }

        draw_text(&layer, &font, &item.code, ROW_SIZE, CODE_X, y);

        let description = truncate_to_width(&item.description, ROW_SIZE, DESC_WIDTH);
        draw_text(&layer, &font, &description, ROW_SIZE, DESC_X, y);

        let quantity = item.quantity.to_string();
        let qty_x = QTY_X + QTY_WIDTH - text_width(&quantity, ROW_SIZE);
        draw_text(&layer, &font, &quantity, ROW_SIZE, qty_x, y);

        y += ROW_PITCH;
    }

    Ok(doc.save_to_bytes()?)
}

/// Draw the column header at `depth` and the rule under it; returns the
/// depth of the first table row below.
fn draw_table_header(layer: &PdfLayerReference, font: &IndirectFontRef, depth: f32) -> f32 {
    draw_text(layer, font, "Código", HEADER_SIZE, CODE_X, depth);
    draw_text(layer, font, "Descrição", HEADER_SIZE, DESC_X, depth);
    let qty_x = QTY_X + QTY_WIDTH - text_width("Qtd", HEADER_SIZE);
    draw_text(layer, font, "Qtd", HEADER_SIZE, qty_x, depth);
    draw_rule(layer, depth + 14.0);
    depth + 20.0
}

/// Place text at a left edge and top-down depth, converting into printpdf's
/// bottom-up millimeter space.
fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    x: f32,
    depth: f32,
) {
    layer.use_text(text, size, Mm::from(Pt(x)), Mm::from(Pt(PAGE_HEIGHT - depth)), font);
}

fn draw_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    depth: f32,
) {
    let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(MARGIN);
    draw_text(layer, font, text, size, x, depth);
}

fn draw_rule(layer: &PdfLayerReference, depth: f32) {
    let y = Mm::from(Pt(PAGE_HEIGHT - depth));
    let rule = Line {
        points: vec![
            (Point::new(Mm::from(Pt(CODE_X)), y), false),
            (Point::new(Mm::from(Pt(RULE_RIGHT_X)), y), false),
        ],
        is_closed: false,
    };
    layer.set_outline_thickness(1.0);
    layer.add_line(rule);
}

/// Approximate rendered width of `text` at `size`.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH
}

/// Cut text down to the column's character budget, marking the cut with a
/// trailing ellipsis.
fn truncate_to_width(text: &str, size: f32, max_width: f32) -> String {
    let budget = (max_width / (size * AVG_GLYPH_WIDTH)) as usize;
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let kept: String = text.chars().take(budget.saturating_sub(3)).collect();
    format!("{}...", kept)
}
