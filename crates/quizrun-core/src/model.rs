//! Core data model types for quizrun.
//!
//! A [`Quiz`] is the validated, immutable form of an authored catalog file.
//! It is built once per run by the catalog loader and read-only thereafter;
//! progress lives separately in the result record.

/// A validated quiz: title, catalog identifier, and questions in authoring
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Human-readable title, shown on every screen.
    pub title: String,
    /// Catalog identifier (the file name without extension); namespaces the
    /// result record.
    pub name: String,
    /// Questions in authoring order. Order is stable for iteration but
    /// irrelevant for selection, which goes through the result record.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Look up a question by id. First match wins; the loader does not
    /// validate id uniqueness.
    pub fn question(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Ids of all questions, in authoring order.
    pub fn question_ids(&self) -> Vec<i64> {
        self.questions.iter().map(|q| q.id).collect()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identity shared between catalog and result records.
    pub id: i64,
    /// The question text.
    pub text: String,
    /// Choices in authored order; shuffled per display by the engine.
    /// Exactly one is correct.
    pub choices: Vec<Choice>,
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            title: "Sample".into(),
            name: "sample".into(),
            questions: vec![
                Question {
                    id: 7,
                    text: "First?".into(),
                    choices: vec![
                        Choice {
                            label: "yes".into(),
                            is_correct: true,
                        },
                        Choice {
                            label: "no".into(),
                            is_correct: false,
                        },
                    ],
                },
                Question {
                    id: 3,
                    text: "Second?".into(),
                    choices: vec![Choice {
                        label: "only".into(),
                        is_correct: true,
                    }],
                },
            ],
        }
    }

    #[test]
    fn question_lookup_by_id() {
        let quiz = sample_quiz();
        assert_eq!(quiz.question(3).unwrap().text, "Second?");
        assert!(quiz.question(99).is_none());
    }

    #[test]
    fn question_lookup_first_match_wins() {
        let mut quiz = sample_quiz();
        quiz.questions[1].id = 7;
        assert_eq!(quiz.question(7).unwrap().text, "First?");
    }

    #[test]
    fn question_ids_keep_authoring_order() {
        assert_eq!(sample_quiz().question_ids(), vec![7, 3]);
    }
}
