//! Axum route handlers for career identity generation.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::coaching::identity::{generate_identity, IdentityRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub success: bool,
    pub statement: String,
    pub message: String,
}

/// POST /api/identity/generate
///
/// Always succeeds: provider failures surface as fallback statements.
pub async fn handle_generate_identity(
    State(state): State<AppState>,
    Json(request): Json<IdentityRequest>,
) -> Json<IdentityResponse> {
    let statement = generate_identity(state.chat.as_ref(), &request).await;

    Json(IdentityResponse {
        success: true,
        statement,
        message: "Career identity statement generated successfully".to_string(),
    })
}
