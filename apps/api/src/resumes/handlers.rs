//! HTTP surface for resume versions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resumes::diff::{diff_versions, VersionDiff};
use crate::state::AppState;

/// GET /api/v1/resumes
pub async fn handle_list_versions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.resumes.names())
}

/// GET /api/v1/resumes/:name
pub async fn handle_get_version(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ResumeData>, AppError> {
    state
        .resumes
        .get(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume version '{name}' not found")))
}

/// PUT /api/v1/resumes/:name
pub async fn handle_put_version(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(data): Json<ResumeData>,
) -> Json<ResumeData> {
    state.resumes.upsert(&name, data.clone());
    Json(data)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRequest {
    pub new_name: String,
}

/// POST /api/v1/resumes/:name/duplicate
pub async fn handle_duplicate_version(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<DuplicateRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let new_name = req.new_name.trim();
    if new_name.is_empty() {
        return Err(AppError::Validation(
            "New version name must not be empty.".to_string(),
        ));
    }
    Ok(Json(state.resumes.duplicate(&name, new_name)?))
}

#[derive(Deserialize)]
pub struct DiffQuery {
    pub from: String,
    pub to: String,
}

/// GET /api/v1/resumes/diff?from=A&to=B
pub async fn handle_diff_versions(
    State(state): State<AppState>,
    Query(query): Query<DiffQuery>,
) -> Result<Json<VersionDiff>, AppError> {
    let from = state
        .resumes
        .get(&query.from)
        .ok_or_else(|| AppError::NotFound(format!("Resume version '{}' not found", query.from)))?;
    let to = state
        .resumes
        .get(&query.to)
        .ok_or_else(|| AppError::NotFound(format!("Resume version '{}' not found", query.to)))?;
    Ok(Json(diff_versions(&from, &to)))
}
