//! Interview session state — the pure state machine behind the controller.
//!
//! Everything in this file is synchronous and side-effect free so the phase
//! transitions and transcript invariants can be tested without a runtime.
//! Scheduling (clock ticks, thinking delays, feedback calls) lives in
//! `controller.rs` and `clock.rs`.

use serde::{Deserialize, Serialize};

/// Transient "thinking" marker shown between an answer and the next question.
/// Never a real transcript entry: it is replaced in place when the next
/// question is revealed and stripped before feedback generation.
pub const THINKING_PLACEHOLDER: &str = "...";

/// System line appended when the session finishes and generation begins.
pub const FINISH_MESSAGE: &str = "Interview finished. Generating feedback...";

/// System line appended when the feedback generator fails.
pub const FEEDBACK_ERROR_MESSAGE: &str = "Sorry, there was an error generating feedback.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    User,
    Ai,
    System,
}

/// One transcript entry. Immutable once appended; append order IS the
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: MessageSender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message {
            sender: MessageSender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Message {
            sender: MessageSender::Ai,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Message {
            sender: MessageSender::System,
            text: text.into(),
        }
    }

    /// True for the transient thinking marker.
    pub fn is_placeholder(&self) -> bool {
        self.sender == MessageSender::Ai && self.text == THINKING_PLACEHOLDER
    }
}

/// Post-session evaluation summary. Created once per finished session,
/// immutable, discarded on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// 0..=100.
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Outcome of a one-second clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    /// Time remaining just hit zero; the caller must finish the session.
    Expired,
}

/// Serializable view of a session, returned by every controller operation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub transcript: Vec<Message>,
    pub question_index: usize,
    pub question_count: usize,
    pub time_remaining: u32,
    pub answer_pending: bool,
    pub feedback_pending: bool,
    pub feedback: Option<Feedback>,
}

/// The session state proper. Owned exclusively by a `SessionController`
/// behind a mutex; all mutation goes through the methods below, each of
/// which enforces its own phase preconditions and is a silent no-op when
/// they do not hold.
#[derive(Debug)]
pub struct InterviewSession {
    phase: SessionPhase,
    transcript: Vec<Message>,
    question_index: usize,
    time_remaining: u32,
    feedback: Option<Feedback>,
    /// A submitted answer's thinking delay has not resolved yet; blocks
    /// further submissions.
    answer_pending: bool,
    /// Feedback generation is in flight; blocks submissions and reset.
    feedback_pending: bool,
    /// Bumped on every (re)start and reset. Scheduled callbacks capture the
    /// epoch they were created under and drop themselves on mismatch, so a
    /// stale timer or delay can never mutate a newer session.
    epoch: u64,
}

impl InterviewSession {
    pub fn new() -> Self {
        InterviewSession {
            phase: SessionPhase::NotStarted,
            transcript: Vec::new(),
            question_index: 0,
            time_remaining: 0,
            feedback: None,
            answer_pending: false,
            feedback_pending: false,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn answer_pending(&self) -> bool {
        self.answer_pending
    }

    pub fn feedback_pending(&self) -> bool {
        self.feedback_pending
    }

    /// True when `epoch` is still the live epoch and the session is mid
    /// interview. Every scheduled callback checks this before mutating.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch && self.phase == SessionPhase::InProgress
    }

    /// Transitions `not_started | finished -> in_progress`, seeding the
    /// transcript with the first question. Returns false (and changes
    /// nothing) while a session is already in progress.
    pub fn begin(&mut self, total_secs: u32, first_question: &str) -> bool {
        if self.phase == SessionPhase::InProgress {
            return false;
        }
        self.epoch += 1;
        self.phase = SessionPhase::InProgress;
        self.time_remaining = total_secs;
        self.question_index = 0;
        self.transcript = vec![Message::ai(first_question)];
        self.feedback = None;
        self.answer_pending = false;
        self.feedback_pending = false;
        true
    }

    /// Whether `submit_answer(text)` would be accepted right now.
    pub fn accepts_answer(&self, text: &str) -> bool {
        self.phase == SessionPhase::InProgress
            && !self.answer_pending
            && !self.feedback_pending
            && !text.trim().is_empty()
    }

    /// Appends the user's answer and marks the thinking delay as pending.
    /// Caller must have checked `accepts_answer` under the same lock.
    pub fn push_answer(&mut self, text: &str) {
        debug_assert!(self.accepts_answer(text));
        self.transcript.push(Message::user(text.trim()));
        self.answer_pending = true;
    }

    /// Appends the transient thinking marker.
    pub fn show_placeholder(&mut self) {
        self.transcript.push(Message::ai(THINKING_PLACEHOLDER));
    }

    /// Replaces the trailing placeholder (when present) with the next
    /// question and advances the question index.
    pub fn reveal_question(&mut self, question: &str) {
        self.replace_placeholder(Message::ai(question));
        self.question_index += 1;
        self.answer_pending = false;
    }

    /// Replaces the trailing placeholder with the closing line. The question
    /// index stays put: it never reaches the question count.
    pub fn reveal_closing(&mut self, closing: &str) {
        self.replace_placeholder(Message::ai(closing));
        self.answer_pending = false;
    }

    fn replace_placeholder(&mut self, message: Message) {
        if self.transcript.last().is_some_and(Message::is_placeholder) {
            self.transcript.pop();
        }
        self.transcript.push(message);
    }

    /// One elapsed second. Only meaningful while in progress; the clock
    /// checks `is_current` before calling.
    pub fn tick(&mut self) -> Tick {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running
        }
    }

    /// Transitions `in_progress -> finished`: strips any stray placeholder,
    /// cancels a pending answer, appends the finish line and marks feedback
    /// generation pending. Returns the transcript to hand to the feedback
    /// generator, or `None` when the session was not in progress — which is
    /// what makes the transition exactly-once under the timer/manual-end
    /// race.
    pub fn begin_finish(&mut self) -> Option<Vec<Message>> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        self.phase = SessionPhase::Finished;
        self.answer_pending = false;
        self.transcript.retain(|m| !m.is_placeholder());
        self.transcript.push(Message::system(FINISH_MESSAGE));
        self.feedback_pending = true;
        Some(self.transcript.clone())
    }

    /// Stores generated feedback. No-op unless generation is pending for the
    /// given epoch.
    pub fn complete_feedback(&mut self, epoch: u64, feedback: Feedback) {
        if self.epoch != epoch || !self.feedback_pending {
            return;
        }
        self.feedback = Some(feedback);
        self.feedback_pending = false;
    }

    /// Records a generation failure: system error line, feedback stays
    /// `None`, the session remains finished and resettable.
    pub fn fail_feedback(&mut self, epoch: u64) {
        if self.epoch != epoch || !self.feedback_pending {
            return;
        }
        self.transcript.push(Message::system(FEEDBACK_ERROR_MESSAGE));
        self.feedback_pending = false;
    }

    /// Transitions `finished -> not_started` once feedback has been
    /// delivered or has failed. Clears the transcript and feedback and bumps
    /// the epoch so any straggling callback is dropped. Returns false (and
    /// changes nothing) otherwise.
    pub fn reset(&mut self) -> bool {
        if self.phase != SessionPhase::Finished || self.feedback_pending {
            return false;
        }
        self.epoch += 1;
        self.phase = SessionPhase::NotStarted;
        self.transcript.clear();
        self.question_index = 0;
        self.time_remaining = 0;
        self.feedback = None;
        self.answer_pending = false;
        true
    }

    pub fn snapshot(&self, question_count: usize) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            transcript: self.transcript.clone(),
            question_index: self.question_index,
            question_count,
            time_remaining: self.time_remaining,
            answer_pending: self.answer_pending,
            feedback_pending: self.feedback_pending,
            feedback: self.feedback.clone(),
        }
    }
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> InterviewSession {
        let mut s = InterviewSession::new();
        assert!(s.begin(300, "Q0"));
        s
    }

    #[test]
    fn test_begin_seeds_first_question() {
        let s = started();
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.time_remaining(), 300);
        assert_eq!(s.question_index(), 0);
        assert_eq!(s.transcript(), &[Message::ai("Q0")]);
    }

    #[test]
    fn test_begin_is_noop_while_in_progress() {
        let mut s = started();
        s.push_answer("hello");
        let epoch = s.epoch();
        assert!(!s.begin(300, "Q0"));
        assert_eq!(s.epoch(), epoch);
        assert_eq!(s.transcript().len(), 2);
    }

    #[test]
    fn test_rejects_blank_and_whitespace_answers() {
        let s = started();
        assert!(!s.accepts_answer(""));
        assert!(!s.accepts_answer("   "));
        assert!(s.accepts_answer("a real answer"));
    }

    #[test]
    fn test_rejects_answer_while_thinking_pending() {
        let mut s = started();
        s.push_answer("first");
        assert!(!s.accepts_answer("second"));
    }

    #[test]
    fn test_rejects_answer_when_not_started() {
        let s = InterviewSession::new();
        assert!(!s.accepts_answer("hello"));
    }

    #[test]
    fn test_reveal_question_replaces_placeholder_and_advances() {
        let mut s = started();
        s.push_answer("my answer");
        s.show_placeholder();
        assert!(s.transcript().last().unwrap().is_placeholder());
        s.reveal_question("Q1");
        assert_eq!(s.question_index(), 1);
        assert!(!s.answer_pending());
        assert_eq!(s.transcript().last().unwrap(), &Message::ai("Q1"));
        // placeholder was replaced, not appended after
        assert_eq!(s.transcript().len(), 3);
    }

    #[test]
    fn test_finish_is_exactly_once() {
        let mut s = started();
        assert!(s.begin_finish().is_some());
        assert!(s.begin_finish().is_none());
        assert_eq!(s.phase(), SessionPhase::Finished);
    }

    #[test]
    fn test_finish_strips_placeholder_from_feedback_transcript() {
        let mut s = started();
        s.push_answer("answer");
        s.show_placeholder();
        let transcript = s.begin_finish().expect("should finish");
        assert!(transcript.iter().all(|m| !m.is_placeholder()));
        assert_eq!(
            transcript.last().unwrap(),
            &Message::system(FINISH_MESSAGE)
        );
        assert!(!s.answer_pending());
    }

    #[test]
    fn test_tick_expires_at_zero() {
        let mut s = InterviewSession::new();
        s.begin(2, "Q0");
        assert_eq!(s.tick(), Tick::Running);
        assert_eq!(s.tick(), Tick::Expired);
        assert_eq!(s.time_remaining(), 0);
    }

    #[test]
    fn test_reset_requires_finished_and_delivered_feedback() {
        let mut s = started();
        assert!(!s.reset(), "cannot reset mid-interview");
        s.begin_finish();
        assert!(!s.reset(), "cannot reset while feedback pending");
        let epoch = s.epoch();
        s.complete_feedback(
            epoch,
            Feedback {
                overall_score: 80,
                strengths: vec![],
                weaknesses: vec![],
                suggestions: vec![],
            },
        );
        assert!(s.reset());
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert!(s.transcript().is_empty());
        assert!(s.feedback().is_none());
    }

    #[test]
    fn test_stale_epoch_feedback_is_dropped() {
        let mut s = started();
        let old_epoch = s.epoch();
        s.begin_finish();
        s.fail_feedback(old_epoch);
        assert!(s.reset());
        // A second session starts; the old generation result must not land.
        s.begin(300, "Q0");
        s.complete_feedback(
            old_epoch,
            Feedback {
                overall_score: 99,
                strengths: vec![],
                weaknesses: vec![],
                suggestions: vec![],
            },
        );
        assert!(s.feedback().is_none());
    }

    #[test]
    fn test_failed_feedback_appends_system_error() {
        let mut s = started();
        s.begin_finish();
        let epoch = s.epoch();
        s.fail_feedback(epoch);
        assert!(s.feedback().is_none());
        assert!(!s.feedback_pending());
        assert_eq!(
            s.transcript().last().unwrap(),
            &Message::system(FEEDBACK_ERROR_MESSAGE)
        );
        assert!(s.reset(), "failure still allows reset");
    }
}
