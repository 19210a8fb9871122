//! HTTP surface for the job tracker.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::coach::recommend::recommend_for_application;
use crate::errors::AppError;
use crate::models::tracker::{JobApplication, JobApplicationStatus};
use crate::state::AppState;

/// GET /api/v1/tracker/applications
pub async fn handle_list_applications(State(state): State<AppState>) -> Json<Vec<JobApplication>> {
    Json(state.tracker.list())
}

#[derive(Deserialize)]
pub struct AddApplicationRequest {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub url: String,
}

/// POST /api/v1/tracker/applications
/// Fetches the mock strategy recommendation before the card is created, so
/// every new card carries one from the start.
pub async fn handle_add_application(
    State(state): State<AppState>,
    Json(req): Json<AddApplicationRequest>,
) -> Result<Json<JobApplication>, AppError> {
    let company = req.company.trim();
    let role = req.role.trim();
    if company.is_empty() || role.is_empty() {
        return Err(AppError::Validation(
            "Company and role are required.".to_string(),
        ));
    }
    let recommendation = recommend_for_application(role, company).await;
    Ok(Json(state.tracker.add(
        company.to_string(),
        role.to_string(),
        req.url,
        recommendation,
    )))
}

#[derive(Deserialize)]
pub struct StatusChangeRequest {
    pub status: JobApplicationStatus,
}

/// PATCH /api/v1/tracker/applications/:id/status
pub async fn handle_status_change(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusChangeRequest>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(state.tracker.set_status(id, req.status)?))
}
