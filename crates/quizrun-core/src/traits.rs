//! Collaborator traits for the session engine.
//!
//! The engine drives a session through two seams: a [`QuizUi`] that owns all
//! terminal interaction, and a [`ProgressSink`] notified after every
//! accepted correct answer. `quizrun-term` provides the console UI and a
//! scripted mock; the CLI wires the sink to the result store.

use std::io;

use crate::error::ResultError;
use crate::model::{Choice, Question};
use crate::record::ResultRecord;

/// What the user did at an answer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptReply {
    /// Index into the displayed (shuffled) choice list.
    Choice(usize),
    /// No answer; the question stays pending.
    Skip,
    /// The cancellation signal was observed while awaiting input.
    Interrupted,
}

/// Terminal interaction surface of a quiz session.
///
/// Implementations may block on terminal I/O; the answer prompt is the only
/// suspension point of a session and the only place interruption is
/// observed.
pub trait QuizUi {
    /// Greet the user and collect `(first_name, last_name)`.
    fn prompt_start_info(&mut self, quiz_title: &str) -> io::Result<(String, String)>;

    /// Show the resume screen with the current score.
    fn show_resume_summary(
        &mut self,
        quiz_title: &str,
        first_name: &str,
        last_name: &str,
        correct_count: usize,
        total_count: usize,
    ) -> io::Result<()>;

    /// Display one question with its (already shuffled) choices and collect
    /// a reply. `index` is 1-based among `total` questions of this session.
    fn prompt_answer(
        &mut self,
        question: &Question,
        choices: &[Choice],
        index: usize,
        total: usize,
    ) -> io::Result<PromptReply>;

    /// Show the final score screen.
    fn show_final_results(
        &mut self,
        quiz_title: &str,
        correct_count: usize,
        total_count: usize,
    ) -> io::Result<()>;
}

/// Observer notified each time the engine accepts a correct answer.
///
/// The record passed is the complete new snapshot, so a persisting sink can
/// write it verbatim.
pub trait ProgressSink {
    fn record_updated(&mut self, record: &ResultRecord) -> Result<(), ResultError>;
}

/// Sink that drops updates, for sessions that do not persist incrementally.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn record_updated(&mut self, _: &ResultRecord) -> Result<(), ResultError> {
        Ok(())
    }
}
