//! Feedback generation — pluggable, trait-based evaluator for a finished
//! interview transcript.
//!
//! Default: `CannedFeedbackGenerator` (fixed delay, canned text, randomized
//! score — no real inference, matching the product's mocked AI).
//! `AppState` holds an `Arc<dyn FeedbackGenerator>`, swapped at startup.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::interview::session::{Feedback, Message, MessageSender};

/// Simulated network latency for the mock generator.
const GENERATION_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback generation failed: {0}")]
    Unavailable(String),
}

/// The feedback generator trait. Implement this to swap backends without
/// touching the controller. May fail; the controller converts failure into a
/// system transcript message and leaves feedback unset.
///
/// The transcript handed in is placeholder-free (the controller strips the
/// transient thinking marker before calling).
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn generate(&self, transcript: &[Message]) -> Result<Feedback, FeedbackError>;
}

/// Mock generator: sleeps for a simulated round trip, then returns canned
/// strengths/weaknesses/suggestions with a score in 60..=94.
#[derive(Debug, Clone)]
pub struct CannedFeedbackGenerator {
    latency: Duration,
}

impl CannedFeedbackGenerator {
    pub fn new(latency: Duration) -> Self {
        CannedFeedbackGenerator { latency }
    }
}

impl Default for CannedFeedbackGenerator {
    fn default() -> Self {
        CannedFeedbackGenerator::new(GENERATION_LATENCY)
    }
}

#[async_trait]
impl FeedbackGenerator for CannedFeedbackGenerator {
    async fn generate(&self, transcript: &[Message]) -> Result<Feedback, FeedbackError> {
        tokio::time::sleep(self.latency).await;

        let answered = transcript
            .iter()
            .filter(|m| m.sender == MessageSender::User)
            .count();
        debug!("Generating canned feedback over {answered} user answers");

        let overall_score = rand::thread_rng().gen_range(60..95);

        Ok(Feedback {
            overall_score,
            strengths: vec![
                "You provided a clear introduction about your background.".to_string(),
                "Good use of the STAR method when describing your challenging project.".to_string(),
                "Showed enthusiasm for the role and the company.".to_string(),
            ],
            weaknesses: vec![
                "Your answer about future goals could be more specific and aligned with the company's vision.".to_string(),
                "Could have asked more insightful questions at the end of the interview.".to_string(),
            ],
            suggestions: vec![
                "Research the company's recent achievements and tie your career goals to them.".to_string(),
                "Prepare 2-3 specific questions about the team, culture, or technical challenges.".to_string(),
                "Practice articulating your long-term vision with more confidence.".to_string(),
            ],
        })
    }
}
