//! HTTP surface for the mock coach services.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::coach::cover_letter::{generate_cover_letter, CoverLetterTone};
use crate::coach::resume_review::{review_resume, SuggestionMap};
use crate::coach::roadmap::generate_roadmap;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::roadmap::RoadmapStep;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub tone: CoverLetterTone,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/coach/cover-letter
pub async fn handle_cover_letter(
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let cover_letter = generate_cover_letter(&req.job_description, req.tone).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

#[derive(Deserialize)]
pub struct ResumeReviewRequest {
    pub resume: ResumeData,
}

/// POST /api/v1/coach/resume-review
pub async fn handle_resume_review(
    Json(req): Json<ResumeReviewRequest>,
) -> Result<Json<SuggestionMap>, AppError> {
    Ok(Json(review_resume(&req.resume).await))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub career_goal: String,
}

/// POST /api/v1/coach/roadmap
pub async fn handle_roadmap(
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<Vec<RoadmapStep>>, AppError> {
    Ok(Json(generate_roadmap(&req.career_goal).await?))
}
