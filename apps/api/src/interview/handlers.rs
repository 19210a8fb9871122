//! HTTP surface for the interview engine. Handlers are thin: they resolve
//! the session and forward into the controller, which owns all state
//! transitions. Ignored operations (wrong phase, blank answer, pending
//! submission) still return 200 with the unchanged snapshot — the
//! controller's silent-ignore semantics, not errors.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::controller::SessionController;
use crate::interview::session::SessionSnapshot;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

fn resolve(state: &AppState, id: Uuid) -> Result<SessionController, AppError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Interview session {id} not found")))
}

/// POST /api/v1/interviews
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let controller = SessionController::new(
        state.questions.clone(),
        state.feedback.clone(),
        state.timing,
    );
    let snapshot = controller.start();
    let session_id = state.sessions.insert(controller);
    Ok(Json(CreateSessionResponse {
        session_id,
        snapshot,
    }))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(resolve(&state, id)?.snapshot()))
}

/// POST /api/v1/interviews/:id/answers
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(resolve(&state, id)?.submit_answer(&req.text)))
}

/// POST /api/v1/interviews/:id/end
pub async fn handle_end_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(resolve(&state, id)?.end_interview()))
}

/// POST /api/v1/interviews/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(resolve(&state, id)?.reset()))
}

/// POST /api/v1/interviews/:id/restart
/// Starts another session on the same id, valid once the previous one
/// finished (no-op mid-interview, matching `start()` semantics).
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(resolve(&state, id)?.start()))
}
