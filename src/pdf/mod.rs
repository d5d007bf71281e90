//! PDF boundary
//!
//! Reading: positioned text extraction via MuPDF for the listing pipeline.
//! Writing: transfer request document generation via printpdf.

mod report;
mod text;

pub use report::{
    render_transfer_document, ReportError, TransferItem, DEFAULT_TRANSFER_TITLE,
};
pub use text::{read_document_pages, PdfTextError};
