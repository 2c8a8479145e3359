//! Axum route handlers for resume tooling: upload parsing, optimization,
//! bullet rewriting, and cover letters.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::coaching::cover_letter::{generate_cover_letter, CoverLetterRequest};
use crate::coaching::resume::{
    optimize_resume, rewrite_bullet, BulletEdit, JobEdit, OptimizeRequest, RewriteRequest,
};
use crate::errors::AppError;
use crate::extract::{detect_kind, extract_text};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub success: bool,
    pub filename: String,
    pub extracted_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub optimized_guide: String,
    /// Same content as `optimized_guide`; kept for older clients.
    pub optimized_content: String,
    pub suggestions: Vec<String>,
    pub job_edits: Vec<JobEdit>,
    pub bullet_edits: Vec<BulletEdit>,
    pub pro_tips: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub success: bool,
    pub improved: String,
    pub rationale: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub success: bool,
    pub cover_letter: String,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/parse (legacy)
///
/// Accepts one multipart `file` field (txt, pdf, or docx) and returns the
/// extracted text. Unsupported types get 415; corrupt documents get 400.
pub async fn handle_parse_upload(
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let kind = detect_kind(content_type.as_deref(), &filename)
            .ok_or_else(|| AppError::UnsupportedMedia(format!("Unsupported file type: {filename}")))?;

        let extracted_text = extract_text(kind, bytes).await?;

        return Ok(Json(ParseResponse {
            success: true,
            filename,
            extracted_text,
        }));
    }

    Err(AppError::Validation(
        "No 'file' field in multipart upload".to_string(),
    ))
}

/// POST /api/resume/optimize
///
/// Always succeeds: parse misses demote to an unstructured guide and provider
/// failures yield template content.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Json<OptimizeResponse> {
    let result = optimize_resume(state.chat.as_ref(), &request).await;

    Json(OptimizeResponse {
        success: true,
        optimized_content: result.guide.clone(),
        optimized_guide: result.guide,
        suggestions: result.suggestions,
        job_edits: result.job_edits,
        bullet_edits: result.bullet_edits,
        pro_tips: result.pro_tips,
    })
}

/// POST /api/resume/rewrite-bullet
pub async fn handle_rewrite_bullet(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Json<RewriteResponse> {
    let bullet = rewrite_bullet(state.chat.as_ref(), &request).await;

    Json(RewriteResponse {
        success: true,
        improved: bullet.improved,
        rationale: bullet.rationale,
        keywords: bullet.keywords,
    })
}

/// POST /api/resume/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Json<CoverLetterResponse> {
    let cover_letter = generate_cover_letter(state.chat.as_ref(), &request).await;

    Json(CoverLetterResponse {
        success: true,
        cover_letter,
        message: "Cover letter generated successfully".to_string(),
    })
}
