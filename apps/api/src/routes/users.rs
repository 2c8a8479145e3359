//! Axum route handlers for users and saved careers.
//!
//! Saved-career ids are deliberately NOT validated against the careers table;
//! a dangling id is permitted, matching the store's permissive semantics.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::{User, UserProfile};
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct SaveIdentityRequest {
    pub statement: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/users
///
/// Find-or-create by email: an already-registered email returns the existing
/// row untouched.
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    let user = match store::users::get_user_by_email(&state.db, &request.email).await? {
        Some(existing) => existing,
        None => store::users::create_user(&state.db, &request.email, request.profile).await?,
    };

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// GET /api/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = store::users::get_user_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// PUT /api/users/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<AckResponse>, AppError> {
    let user = require_user(&state, &id).await?;

    store::users::update_profile(&state.db, user.id, profile).await?;

    Ok(Json(AckResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
    }))
}

/// POST /api/users/:id/identity
///
/// Overwrites the stored identity statement; regeneration never versions.
pub async fn handle_save_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SaveIdentityRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let user = require_user(&state, &id).await?;

    store::users::save_identity(&state.db, user.id, &request.statement).await?;

    Ok(Json(AckResponse {
        success: true,
        message: "Career identity saved successfully".to_string(),
    }))
}

/// POST /api/users/:id/careers/:career_id
///
/// Idempotent: saving an already-saved career succeeds without change.
pub async fn handle_save_career(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(String, String)>,
) -> Result<Json<AckResponse>, AppError> {
    let user = require_user(&state, &id).await?;

    store::users::add_saved_career(&state.db, user.id, &career_id).await?;

    Ok(Json(AckResponse {
        success: true,
        message: "Career saved successfully".to_string(),
    }))
}

/// DELETE /api/users/:id/careers/:career_id
///
/// Removing an absent career id is a no-op, not an error.
pub async fn handle_remove_career(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(String, String)>,
) -> Result<Json<AckResponse>, AppError> {
    let user = require_user(&state, &id).await?;

    store::users::remove_saved_career(&state.db, user.id, &career_id).await?;

    Ok(Json(AckResponse {
        success: true,
        message: "Career removed successfully".to_string(),
    }))
}

async fn require_user(state: &AppState, id: &str) -> Result<User, AppError> {
    store::users::get_user_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
