//! Session engine: drives one interactive run from a quiz and a result
//! record to a final result record.
//!
//! The engine owns question selection and answer validation; terminal
//! interaction goes through the [`QuizUi`] seam and incremental persistence
//! through the [`ProgressSink`] seam. Randomness is injected so tests can
//! seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SessionError;
use crate::model::{Choice, Quiz};
use crate::record::ResultRecord;
use crate::traits::{ProgressSink, PromptReply, QuizUi};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Nothing was pending; the record is already complete.
    AllAnswered,
    /// Every pending question was presented.
    Finished,
    /// The cancellation signal arrived mid-session.
    Interrupted,
}

/// Final state of a session.
#[derive(Debug)]
pub struct SessionOutcome {
    /// The record after the last successfully processed answer. On
    /// interruption this is exactly the value the caller must persist.
    pub record: ResultRecord,
    pub completion: Completion,
}

/// Check a selected choice index against the displayed choice list.
///
/// `None` (no answer) and out-of-range indices are simply wrong, never
/// errors.
pub fn is_correct_answer(choices: &[Choice], selected: Option<usize>) -> bool {
    match selected {
        Some(index) => choices.get(index).is_some_and(|c| c.is_correct),
        None => false,
    }
}

/// Run one interactive session.
///
/// Pending questions are drawn in a fresh random order; each question's
/// choices are re-shuffled for display. Wrong and skipped answers are not
/// recorded and stay pending for a future resumed session. A correct answer
/// replaces the held record via [`ResultRecord::mark_correct`] and notifies
/// `sink` with the new snapshot.
pub fn run_session<R: Rng + ?Sized>(
    quiz: &Quiz,
    record: ResultRecord,
    ui: &mut dyn QuizUi,
    sink: &mut dyn ProgressSink,
    rng: &mut R,
) -> Result<SessionOutcome, SessionError> {
    let pending = record.pending_ids(rng);
    if pending.is_empty() {
        tracing::debug!(quiz = %quiz.name, "all questions already answered");
        return Ok(SessionOutcome {
            record,
            completion: Completion::AllAnswered,
        });
    }

    let total = pending.len();
    tracing::debug!(quiz = %quiz.name, pending = total, "session started");

    let mut record = record;
    let mut completion = Completion::Finished;

    for (index, &id) in pending.iter().enumerate() {
        let question = quiz
            .question(id)
            .ok_or_else(|| SessionError::QuestionNotFound {
                id,
                quiz: quiz.name.clone(),
            })?;

        let mut choices = question.choices.clone();
        choices.shuffle(rng);

        let selected = match ui.prompt_answer(question, &choices, index + 1, total)? {
            PromptReply::Choice(i) => Some(i),
            PromptReply::Skip => None,
            PromptReply::Interrupted => {
                tracing::debug!(quiz = %quiz.name, "session interrupted");
                completion = Completion::Interrupted;
                break;
            }
        };

        if is_correct_answer(&choices, selected) {
            record = record.mark_correct(id);
            sink.record_updated(&record)?;
        }
    }

    Ok(SessionOutcome { record, completion })
}
