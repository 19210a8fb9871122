//! Question source — the fixed, ordered interview script.
//!
//! Read-only for the lifetime of the app; the controller consumes it by
//! index and never mutates it.

use std::time::Duration;

/// Default session length: 5 minutes.
pub const INTERVIEW_DURATION_SECS: u32 = 300;

/// Simulated latencies around a submitted answer (see `controller.rs`).
pub const THINKING_DELAY: Duration = Duration::from_millis(500);
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);
/// Pause after the closing line so the candidate can read it before the
/// session finishes.
pub const WRAP_UP_DELAY: Duration = Duration::from_millis(1000);

const DEFAULT_QUESTIONS: [&str; 5] = [
    "Welcome! To start, can you tell me a little bit about yourself and your background?",
    "What interests you about this role and our company?",
    "Can you describe a challenging project you worked on and how you handled it?",
    "Where do you see yourself in 5 years?",
    "Do you have any questions for me?",
];

const CLOSING_MESSAGE: &str = "That's all the questions I have for you. Let's wrap up.";

/// An ordered list of interview prompts, consumed by index.
#[derive(Debug, Clone)]
pub struct QuestionSource {
    prompts: Vec<String>,
    closing: String,
}

impl QuestionSource {
    pub fn new(prompts: Vec<String>, closing: impl Into<String>) -> Self {
        assert!(!prompts.is_empty(), "an interview needs at least one question");
        QuestionSource {
            prompts,
            closing: closing.into(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    pub fn first(&self) -> &str {
        &self.prompts[0]
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for QuestionSource {
    fn default() -> Self {
        QuestionSource::new(
            DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            CLOSING_MESSAGE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_has_five_prompts() {
        let source = QuestionSource::default();
        assert_eq!(source.len(), 5);
        assert_eq!(source.get(0), Some(source.first()));
        assert_eq!(source.get(5), None);
    }

    #[test]
    #[should_panic(expected = "at least one question")]
    fn test_empty_script_is_rejected() {
        QuestionSource::new(vec![], "bye");
    }
}
