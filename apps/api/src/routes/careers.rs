//! Axum route handlers for the career catalog and recommendations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::coaching::matching::{recommend_careers, Recommendation};
use crate::errors::AppError;
use crate::models::career::Career;
use crate::models::user::UserProfile;
use crate::state::AppState;
use crate::store;

const DEFAULT_CAREER_LIMIT: i64 = 50;
/// Candidate pool fetched for one recommendation request.
const RECOMMEND_FETCH_LIMIT: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareersQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub success: bool,
    pub careers: Vec<Career>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerDetailResponse {
    pub success: bool,
    pub career: Career,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub user_profile: UserProfile,
    /// Accepted for forward compatibility; not used by the pipeline yet.
    #[serde(default)]
    #[allow(dead_code)]
    pub preferences: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub match_scores: HashMap<String, u8>,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/careers?search=&category=&limit=
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(query): Query<CareersQuery>,
) -> Result<Json<CareersResponse>, AppError> {
    let careers = store::careers::list_careers(
        &state.db,
        query.search.as_deref(),
        query.category.as_deref(),
        query.limit.unwrap_or(DEFAULT_CAREER_LIMIT),
    )
    .await?;

    Ok(Json(CareersResponse {
        success: true,
        count: careers.len(),
        careers,
    }))
}

/// GET /api/careers/categories
pub async fn handle_list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = store::careers::list_categories(&state.db).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /api/careers/:id
///
/// A malformed id behaves exactly like an unknown one: 404.
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let career = store::careers::get_career(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;

    Ok(Json(CareerDetailResponse {
        success: true,
        career,
    }))
}

/// POST /api/careers/recommend
///
/// Fetches up to 100 candidates and hands them to the scoring pipeline, which
/// scores at most the first 10 and returns the top 5 at or above the floor.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let careers =
        store::careers::list_careers(&state.db, None, None, RECOMMEND_FETCH_LIMIT).await?;

    let result = recommend_careers(state.chat.as_ref(), &request.user_profile, careers).await;

    Ok(Json(RecommendResponse {
        success: true,
        recommendations: result.recommendations,
        match_scores: result.match_scores,
        message: "Career recommendations generated successfully".to_string(),
    }))
}
