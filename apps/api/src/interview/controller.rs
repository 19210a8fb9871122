//! Session controller — sole authority over session state, question index
//! and transcript mutation.
//!
//! Flow: `start` seeds the transcript with question 0 and spawns the clock;
//! each accepted answer schedules the thinking delay that reveals the next
//! question (or the closing line, then termination); the clock forces the
//! same termination on timeout. Termination invokes the feedback generator
//! exactly once.
//!
//! Concurrency model: cooperative on the tokio runtime. The state lives in
//! one mutex, never held across an await. Every scheduled step re-checks
//! the session epoch and phase under the lock before mutating, so a reset
//! or restart silently cancels everything scheduled before it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::interview::clock;
use crate::interview::feedback::FeedbackGenerator;
use crate::interview::questions::{
    QuestionSource, INTERVIEW_DURATION_SECS, REVEAL_DELAY, THINKING_DELAY, WRAP_UP_DELAY,
};
use crate::interview::session::{InterviewSession, SessionSnapshot, Tick};

/// Timing knobs for a session. Defaults match the product constants;
/// tests shrink them or drive a paused clock.
#[derive(Debug, Clone, Copy)]
pub struct InterviewTiming {
    pub duration_secs: u32,
    pub thinking_delay: Duration,
    pub reveal_delay: Duration,
    pub wrap_up_delay: Duration,
}

impl Default for InterviewTiming {
    fn default() -> Self {
        InterviewTiming {
            duration_secs: INTERVIEW_DURATION_SECS,
            thinking_delay: THINKING_DELAY,
            reveal_delay: REVEAL_DELAY,
            wrap_up_delay: WRAP_UP_DELAY,
        }
    }
}

/// Cheaply cloneable handle to one interview session. All handler and
/// scheduled-task access goes through this.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    session: Mutex<InterviewSession>,
    questions: Arc<QuestionSource>,
    generator: Arc<dyn FeedbackGenerator>,
    timing: InterviewTiming,
}

impl SessionController {
    pub fn new(
        questions: Arc<QuestionSource>,
        generator: Arc<dyn FeedbackGenerator>,
        timing: InterviewTiming,
    ) -> Self {
        SessionController {
            inner: Arc::new(ControllerInner {
                session: Mutex::new(InterviewSession::new()),
                questions,
                generator,
                timing,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InterviewSession> {
        // Lock poisoning only happens if a holder panicked; the state itself
        // is still consistent because every mutation is a single call.
        self.inner
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn question_count(&self) -> usize {
        self.inner.questions.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot(self.question_count())
    }

    /// Starts (or restarts after a finished session) the interview.
    /// No-op while one is already in progress.
    pub fn start(&self) -> SessionSnapshot {
        let timing = self.inner.timing;
        let (started, epoch, snapshot) = {
            let mut session = self.lock();
            let started = session.begin(timing.duration_secs, self.inner.questions.first());
            (started, session.epoch(), session.snapshot(self.question_count()))
        };
        if started {
            info!(epoch, duration_secs = timing.duration_secs, "Interview started");
            clock::spawn(self.clone(), epoch);
        }
        snapshot
    }

    /// Accepts an answer and schedules the reveal of the next question (or
    /// the closing line and termination). Silently ignored when the session
    /// is not accepting answers or the text is blank.
    pub fn submit_answer(&self, text: &str) -> SessionSnapshot {
        let (epoch, next_question, snapshot) = {
            let mut session = self.lock();
            if !session.accepts_answer(text) {
                debug!(phase = ?session.phase(), "Ignoring answer submission");
                return session.snapshot(self.question_count());
            }
            session.push_answer(text);
            let next = self
                .inner
                .questions
                .get(session.question_index() + 1)
                .map(str::to_string);
            (session.epoch(), next, session.snapshot(self.question_count()))
        };
        self.spawn_thinking(epoch, next_question);
        snapshot
    }

    /// Ends the interview and kicks off feedback generation. Idempotent:
    /// a second call (or a racing timer expiry) is a no-op.
    pub fn end_interview(&self) -> SessionSnapshot {
        let epoch = self.lock().epoch();
        self.finish_if_current(epoch);
        self.snapshot()
    }

    /// Resets a finished session back to `not_started` once feedback has
    /// been delivered or has failed. No-op otherwise.
    pub fn reset(&self) -> SessionSnapshot {
        let mut session = self.lock();
        if session.reset() {
            info!(epoch = session.epoch(), "Interview session reset");
        }
        session.snapshot(self.question_count())
    }

    /// One clock tick for the given epoch. `None` means the epoch is stale
    /// or the session left `in_progress` — the clock stops.
    pub(crate) fn apply_tick(&self, epoch: u64) -> Option<Tick> {
        let mut session = self.lock();
        if !session.is_current(epoch) {
            return None;
        }
        Some(session.tick())
    }

    /// The terminal transition, shared by `end_interview`, question
    /// exhaustion and clock expiry. Exactly-once: `begin_finish` only
    /// succeeds from `in_progress`, and the epoch check drops calls
    /// scheduled before a reset or restart.
    pub(crate) fn finish_if_current(&self, epoch: u64) {
        let transcript = {
            let mut session = self.lock();
            if !session.is_current(epoch) {
                return;
            }
            match session.begin_finish() {
                Some(transcript) => transcript,
                None => return,
            }
        };
        info!(epoch, messages = transcript.len(), "Interview finished, generating feedback");

        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.inner.generator.generate(&transcript).await;
            let mut session = controller.lock();
            match result {
                Ok(feedback) => {
                    session.complete_feedback(epoch, feedback);
                }
                Err(e) => {
                    warn!(epoch, "Feedback generation failed: {e}");
                    session.fail_feedback(epoch);
                }
            }
        });
    }

    /// The thinking delay: placeholder after 500 ms, then the next question
    /// (or the closing line plus, one beat later, termination). Each step
    /// re-validates the epoch, phase and pending flag under the lock.
    fn spawn_thinking(&self, epoch: u64, next_question: Option<String>) {
        let controller = self.clone();
        let timing = self.inner.timing;
        tokio::spawn(async move {
            sleep(timing.thinking_delay).await;
            {
                let mut session = controller.lock();
                if !session.is_current(epoch) || !session.answer_pending() {
                    return;
                }
                session.show_placeholder();
            }

            sleep(timing.reveal_delay).await;
            let wrapping_up = {
                let mut session = controller.lock();
                if !session.is_current(epoch) || !session.answer_pending() {
                    return;
                }
                match &next_question {
                    Some(question) => {
                        session.reveal_question(question);
                        false
                    }
                    None => {
                        session.reveal_closing(controller.inner.questions.closing());
                        true
                    }
                }
            };

            if wrapping_up {
                // Let the candidate read the closing line before finishing.
                sleep(timing.wrap_up_delay).await;
                controller.finish_if_current(epoch);
            }
        });
    }
}
