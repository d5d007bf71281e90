//! Comparison Routes
//!
//! HTTP endpoint for comparing two uploaded inventory listings.
//!
//! Endpoints:
//! - POST /api/v1/compare - Upload source and destination PDFs, get the per-category diff

use axum::{
    body::Bytes,
    extract::{multipart::Field, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::compare::{diff, ComparisonResult};
use crate::error::{AppError, Result};
use crate::listing::{self, GroupedRecords};
use crate::pdf::{self, PdfTextError};
use crate::state::AppState;

/// Maximum accepted body size for one comparison request: 25MB
pub const MAX_UPLOAD_SIZE: usize = 25 * 1024 * 1024;

/// Create the comparison router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(compare_documents))
        // Two listing PDFs plus multipart framing
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
}

/// POST /api/v1/compare
///
/// Accepts a multipart form with `source` and `destination` PDF files and
/// responds with the per-category comparison. Unknown fields are ignored;
/// a missing file fails the request before any extraction runs.
async fn compare_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ComparisonResult>> {
    let mut source: Option<Bytes> = None;
    let mut destination: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        match field.name() {
            Some("source") => source = Some(field_bytes(field, "source").await?),
            Some("destination") => destination = Some(field_bytes(field, "destination").await?),
            _ => {}
        }
    }

    let (source, destination) = match (source, destination) {
        (Some(source), Some(destination)) => (source, destination),
        _ => {
            return Err(AppError::BadRequest(
                "Both source and destination PDF files are required".to_string(),
            ))
        }
    };

    tracing::info!(
        source_bytes = source.len(),
        destination_bytes = destination.len(),
        "Comparing inventory listings"
    );

    // The two documents share nothing; extract them concurrently.
    let tolerance = state.row_tolerance();
    let (source_groups, dest_groups) = tokio::try_join!(
        extract_listing(source, tolerance),
        extract_listing(destination, tolerance),
    )?;

    let result = diff(source_groups, dest_groups);

    tracing::info!(
        categories = result.categories.len(),
        "Comparison complete"
    );

    Ok(Json(result))
}

async fn field_bytes(field: Field<'_>, name: &str) -> Result<Bytes> {
    field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} file: {}", name, e)))
}

/// Extract one document's grouped records on the blocking pool; MuPDF
/// operations are CPU-bound.
async fn extract_listing(data: Bytes, tolerance: f32) -> Result<GroupedRecords> {
    let groups = tokio::task::spawn_blocking(
        move || -> std::result::Result<GroupedRecords, PdfTextError> {
            let pages = pdf::read_document_pages(&data)?;
            Ok(listing::extract_grouped_records(&pages, tolerance))
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(groups)
}
