//! Quiz catalog loader.
//!
//! Reads an authored catalog file (plain or obfuscated JSON), validates its
//! shape, and produces an immutable [`Quiz`]. Validation fails fast and
//! reports the first violation found, with 1-based question positions.

use serde_json::Value;

use crate::codec;
use crate::config::DataPaths;
use crate::error::CatalogError;
use crate::model::{Choice, Question, Quiz};

/// Load and validate the catalog for `name` from the quiz directory.
pub fn load_catalog(paths: &DataPaths, name: &str) -> Result<Quiz, CatalogError> {
    let path = paths.quiz_path(name);
    let bytes = std::fs::read(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound { path: path.clone() }
        } else {
            CatalogError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;
    let quiz = parse_catalog(name, &bytes)?;
    tracing::debug!(
        quiz = name,
        questions = quiz.question_count(),
        "catalog loaded from {}",
        path.display()
    );
    Ok(quiz)
}

/// Parse and validate catalog bytes (useful for testing).
///
/// On success the returned quiz has exactly one correct choice per question,
/// derived from the validated `answer_index`. Question id uniqueness is NOT
/// checked here; lookups downstream take the first match.
pub fn parse_catalog(name: &str, bytes: &[u8]) -> Result<Quiz, CatalogError> {
    let root: Value = codec::decode(bytes)?;

    let title = root
        .get("quiz_title")
        .and_then(Value::as_str)
        .ok_or_else(|| CatalogError::format("'quiz_title' must be a string"))?;

    let raw_questions = root
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::format("'questions' must be a sequence"))?;

    let mut questions = Vec::with_capacity(raw_questions.len());
    for (index, raw) in raw_questions.iter().enumerate() {
        let position = index + 1;

        let id = raw
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| CatalogError::question(position, "'id' must be an integer"))?;

        let text = raw
            .get("question")
            .and_then(Value::as_str)
            .ok_or_else(|| CatalogError::question(position, "'question' must be a string"))?;

        let raw_choices = raw
            .get("choices")
            .and_then(Value::as_array)
            .ok_or_else(|| CatalogError::question(position, "'choices' must be a sequence"))?;

        let labels = raw_choices
            .iter()
            .map(|c| c.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                CatalogError::question(position, "'choices' must be a sequence of strings")
            })?;

        let answer_index = raw
            .get("answer_index")
            .and_then(Value::as_i64)
            .ok_or_else(|| CatalogError::question(position, "'answer_index' must be an integer"))?;

        if answer_index < 0 || answer_index as usize >= labels.len() {
            return Err(CatalogError::question(position, "'answer_index' out of range"));
        }

        let choices = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Choice {
                label,
                is_correct: i as i64 == answer_index,
            })
            .collect();

        questions.push(Question {
            id,
            text: text.to_owned(),
            choices,
        });
    }

    Ok(Quiz {
        title: title.to_owned(),
        name: name.to_owned(),
        questions,
    })
}

/// A non-fatal finding from a catalog audit.
#[derive(Debug, Clone)]
pub struct AuditWarning {
    /// The question id (if applicable).
    pub question_id: Option<i64>,
    /// Warning message.
    pub message: String,
}

/// Audit a validated quiz for issues that do not block loading.
pub fn audit_quiz(quiz: &Quiz) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    // Duplicate ids make later questions unreachable (first match wins)
    let mut seen_ids = std::collections::HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(question.id) {
            warnings.push(AuditWarning {
                question_id: Some(question.id),
                message: format!("duplicate question id: {}", question.id),
            });
        }
    }

    for question in &quiz.questions {
        if question.text.trim().is_empty() {
            warnings.push(AuditWarning {
                question_id: Some(question.id),
                message: "question text is empty".into(),
            });
        }
    }

    for question in &quiz.questions {
        if question.choices.len() < 2 {
            warnings.push(AuditWarning {
                question_id: Some(question.id),
                message: "question has a single choice".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataPaths;

    const VALID_JSON: &str = r#"
{
  "quiz_title": "Capitals of Europe",
  "questions": [
    { "id": 1, "question": "Capital of France?",
      "choices": ["Paris", "Lyon", "Marseille"], "answer_index": 0 },
    { "id": 2, "question": "Capital of Austria?",
      "choices": ["Graz", "Vienna"], "answer_index": 1 }
  ]
}
"#;

    #[test]
    fn parse_valid_catalog() {
        let quiz = parse_catalog("capitals", VALID_JSON.as_bytes()).unwrap();
        assert_eq!(quiz.title, "Capitals of Europe");
        assert_eq!(quiz.name, "capitals");
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.questions[0].choices[0].label, "Paris");
    }

    #[test]
    fn exactly_one_correct_choice_per_question() {
        let quiz = parse_catalog("capitals", VALID_JSON.as_bytes()).unwrap();
        for question in &quiz.questions {
            let correct = question.choices.iter().filter(|c| c.is_correct).count();
            assert_eq!(correct, 1, "question {}", question.id);
        }
        assert!(quiz.questions[1].choices[1].is_correct);
    }

    #[test]
    fn parse_obfuscated_catalog() {
        let value: serde_json::Value = serde_json::from_str(VALID_JSON).unwrap();
        let bytes = codec::encode(&value, true).unwrap();
        let quiz = parse_catalog("capitals", &bytes).unwrap();
        assert_eq!(quiz.question_count(), 2);
    }

    #[test]
    fn missing_title_is_a_format_error() {
        let result = parse_catalog("bad", br#"{"questions": []}"#);
        assert!(matches!(result, Err(CatalogError::Format { .. })));
    }

    #[test]
    fn questions_must_be_a_sequence() {
        let result = parse_catalog("bad", br#"{"quiz_title": "T", "questions": 3}"#);
        assert!(matches!(result, Err(CatalogError::Format { .. })));
    }

    #[test]
    fn answer_index_bounds() {
        let with_index = |index: i64| {
            format!(
                r#"{{"quiz_title": "T", "questions": [
                    {{"id": 1, "question": "Q", "choices": ["A", "B"], "answer_index": {index}}}
                ]}}"#
            )
        };

        assert!(parse_catalog("t", with_index(0).as_bytes()).is_ok());
        assert!(parse_catalog("t", with_index(1).as_bytes()).is_ok());
        for out_of_range in [-1, 2, 10] {
            let result = parse_catalog("t", with_index(out_of_range).as_bytes());
            assert!(
                matches!(result, Err(CatalogError::Question { position: 1, .. })),
                "answer_index {out_of_range} must be rejected"
            );
        }
    }

    #[test]
    fn violation_reports_one_based_position() {
        let json = r#"{"quiz_title": "T", "questions": [
            {"id": 1, "question": "Q1", "choices": ["A"], "answer_index": 0},
            {"id": "two", "question": "Q2", "choices": ["A"], "answer_index": 0}
        ]}"#;
        let err = parse_catalog("t", json.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "question 2: 'id' must be an integer");
    }

    #[test]
    fn choices_must_hold_strings() {
        let json = r#"{"quiz_title": "T", "questions": [
            {"id": 1, "question": "Q", "choices": ["A", 2], "answer_index": 0}
        ]}"#;
        let err = parse_catalog("t", json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("sequence of strings"));
    }

    #[test]
    fn load_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        let result = load_catalog(&paths, "nope");
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[test]
    fn load_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        std::fs::create_dir_all(paths.quiz_dir()).unwrap();
        std::fs::write(paths.quiz_path("capitals"), VALID_JSON).unwrap();

        let quiz = load_catalog(&paths, "capitals").unwrap();
        assert_eq!(quiz.name, "capitals");
    }

    #[test]
    fn audit_flags_duplicates_and_thin_questions() {
        let json = r#"{"quiz_title": "T", "questions": [
            {"id": 1, "question": "Q1", "choices": ["A", "B"], "answer_index": 0},
            {"id": 1, "question": "Q2", "choices": ["A"], "answer_index": 0},
            {"id": 2, "question": "  ", "choices": ["A", "B"], "answer_index": 1}
        ]}"#;
        let quiz = parse_catalog("t", json.as_bytes()).unwrap();
        let warnings = audit_quiz(&quiz);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("single choice")));
        assert!(warnings.iter().any(|w| w.message.contains("empty")));
    }
}
