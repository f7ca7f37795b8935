//! Result store: create, persist, reload, and purely update progress records.
//!
//! A [`ResultRecord`] is the persisted progress state for one user's attempt
//! at one catalog. Updates never mutate in place: every operation rebuilds a
//! new value and recomputes `correct_count` from the outcome list, so the
//! caller always holds a fully consistent snapshot (which is what makes the
//! interruption-safety guarantee in the engine hold).
//!
//! Serialized field names (`nom`, `prenom`, `question_id`) are a
//! compatibility contract with pre-existing result files.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::config::DataPaths;
use crate::error::ResultError;

/// Persisted progress for one (quiz, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Name of the originating catalog. Matching it against the loaded quiz
    /// on resume is the caller's responsibility.
    pub quiz_name: String,
    /// Last name, persisted under the historical `nom` key.
    #[serde(rename = "nom")]
    pub last_name: String,
    /// First name, persisted under the historical `prenom` key.
    #[serde(rename = "prenom")]
    pub first_name: String,
    /// Always equals the number of outcomes with `correct == true`.
    pub correct_count: usize,
    /// One outcome per question of the originating quiz; created once and
    /// never grown or shrunk afterwards.
    pub questions: Vec<QuestionOutcome>,
}

/// Per-question outcome. `correct` starts false and only ever becomes true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: i64,
    pub correct: bool,
}

impl ResultRecord {
    /// Build a fresh record with one unanswered outcome per question id.
    pub fn fresh(
        quiz_name: impl Into<String>,
        question_ids: &[i64],
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            quiz_name: quiz_name.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            correct_count: 0,
            questions: question_ids
                .iter()
                .map(|&question_id| QuestionOutcome {
                    question_id,
                    correct: false,
                })
                .collect(),
        }
    }

    /// Return a new record with the outcome for `question_id` marked
    /// correct and `correct_count` recomputed.
    ///
    /// An unknown id is a no-op: the returned record equals the input.
    /// A `true` outcome never flips back.
    #[must_use]
    pub fn mark_correct(&self, question_id: i64) -> Self {
        let questions: Vec<QuestionOutcome> = self
            .questions
            .iter()
            .map(|outcome| QuestionOutcome {
                question_id: outcome.question_id,
                correct: outcome.correct || outcome.question_id == question_id,
            })
            .collect();
        let correct_count = questions.iter().filter(|o| o.correct).count();

        Self {
            quiz_name: self.quiz_name.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            correct_count,
            questions,
        }
    }

    /// Ids of questions not yet answered correctly, in a fresh random order.
    ///
    /// The permutation is drawn from `rng` on every call; no order is
    /// stored anywhere.
    pub fn pending_ids<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        let mut pending: Vec<i64> = self
            .questions
            .iter()
            .filter(|o| !o.correct)
            .map(|o| o.question_id)
            .collect();
        pending.shuffle(rng);
        pending
    }

    /// True once every outcome is correct.
    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|o| o.correct)
    }
}

/// Load a record for `name` from the results directory.
pub fn load_record(paths: &DataPaths, name: &str) -> Result<ResultRecord, ResultError> {
    let path = paths.result_path(name);
    let bytes = std::fs::read(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResultError::NotFound { path: path.clone() }
        } else {
            ResultError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;
    let record = codec::decode(&bytes)?;
    tracing::debug!("result record loaded from {}", path.display());
    Ok(record)
}

/// Persist `record` for `name`, fully overwriting any prior contents.
///
/// The record is obfuscated on disk. The complete payload is encoded before
/// a single write, so no partial encoding ever hits the file; calling this
/// repeatedly with the current state is idempotent.
pub fn save_record(record: &ResultRecord, paths: &DataPaths, name: &str) -> Result<(), ResultError> {
    let path = paths.result_path(name);
    let bytes = codec::encode(record, true).map_err(|e| ResultError::Format(e.into()))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ResultError::Io {
            path: path.clone(),
            source,
        })?;
    }
    std::fs::write(&path, bytes).map_err(|source| ResultError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("result record saved to {}", path.display());
    Ok(())
}
