//! Job-application tracker model — the kanban columns and cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The board columns, in display order. An application moves freely between
/// them (the board is a tracker, not a workflow engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobApplicationStatus {
    Saved,
    Applied,
    Interviewing,
    Offer,
    Hired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub url: String,
    pub status: JobApplicationStatus,
    pub ai_recommendation: String,
    pub created_at: DateTime<Utc>,
}
