//! Transfer Routes
//!
//! HTTP endpoints for turning selected comparison records into a printable
//! transfer request document.
//!
//! Endpoints:
//! - POST /api/v1/transfers - Render selected items into a downloadable PDF

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pdf::{render_transfer_document, TransferItem, DEFAULT_TRANSFER_TITLE};
use crate::state::AppState;

// ============================================================================
// Types
// ============================================================================

/// Request to generate a transfer document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Document heading; omitted titles get the default
    #[serde(default = "default_title")]
    pub title: String,

    /// Selected records, rendered in order
    #[serde(default)]
    pub items: Vec<TransferItem>,
}

fn default_title() -> String {
    DEFAULT_TRANSFER_TITLE.to_string()
}

/// Response for a generated transfer document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    /// Path the document can be downloaded from
    pub url: String,

    /// File name inside the downloads directory
    pub file_name: String,
}

// ============================================================================
// Router
// ============================================================================

/// Create the transfers router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_transfer))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/transfers
///
/// Renders the selected items into a PDF in the downloads directory and
/// returns its download path.
async fn create_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>> {
    if request.items.is_empty() {
        return Err(AppError::BadRequest("No items selected".to_string()));
    }

    let bytes = render_transfer_document(&request.title, &request.items)?;

    let file_name = format!("transfer_{}.pdf", Uuid::new_v4());
    let dir = state.downloads_dir();
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(&file_name), &bytes).await?;

    tracing::info!(
        file = %file_name,
        items = request.items.len(),
        bytes = bytes.len(),
        "Transfer document generated"
    );

    Ok(Json(TransferResponse {
        url: format!("/downloads/{}", file_name),
        file_name,
    }))
}
