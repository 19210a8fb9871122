use std::sync::Arc;

use crate::config::Config;
use crate::interview::controller::InterviewTiming;
use crate::interview::feedback::FeedbackGenerator;
use crate::interview::questions::QuestionSource;
use crate::interview::registry::SessionRegistry;
use crate::resumes::store::VersionStore;
use crate::tracker::board::TrackerBoard;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything is in-memory; nothing survives a restart.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    /// The fixed interview script, read-only for the process lifetime.
    pub questions: Arc<QuestionSource>,
    /// Pluggable feedback generator. Default: CannedFeedbackGenerator.
    pub feedback: Arc<dyn FeedbackGenerator>,
    pub timing: InterviewTiming,
    pub resumes: VersionStore,
    pub tracker: TrackerBoard,
    pub config: Config,
}
