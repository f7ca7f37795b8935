//! Smoke test: a full session driven through the scripted UI.

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizrun_core::catalog;
use quizrun_core::engine::{run_session, Completion};
use quizrun_core::record::ResultRecord;
use quizrun_core::traits::{NullSink, PromptReply, QuizUi};
use quizrun_term::mock::ScriptedUi;

const CATALOG: &str = r#"{
  "quiz_title": "Smoke",
  "questions": [
    { "id": 1, "question": "One?", "choices": ["yes"], "answer_index": 0 },
    { "id": 2, "question": "Two?", "choices": ["yes"], "answer_index": 0 },
    { "id": 3, "question": "Three?", "choices": ["yes"], "answer_index": 0 }
  ]
}"#;

#[test]
fn scripted_session_from_catalog_to_final_record() {
    let quiz = catalog::parse_catalog("smoke", CATALOG.as_bytes()).unwrap();

    // Single-choice questions: Choice(0) is always correct
    let mut ui = ScriptedUi::new(
        "Jane",
        "Doe",
        vec![
            PromptReply::Choice(0),
            PromptReply::Skip,
            PromptReply::Choice(0),
        ],
    );
    let (first_name, last_name) = ui.prompt_start_info(&quiz.title).unwrap();
    let record = ResultRecord::fresh(&quiz.name, &quiz.question_ids(), first_name, last_name);

    let mut rng = StdRng::seed_from_u64(42);
    let outcome = run_session(&quiz, record, &mut ui, &mut NullSink, &mut rng).unwrap();

    assert_eq!(outcome.completion, Completion::Finished);
    assert_eq!(outcome.record.correct_count, 2);
    assert_eq!(ui.presented.len(), 3);

    ui.show_final_results(&quiz.title, outcome.record.correct_count, quiz.question_count())
        .unwrap();
    assert_eq!(ui.final_results, Some(("Smoke".to_string(), 2, 3)));

    // Resume: only the skipped question is pending
    let mut resume_ui = ScriptedUi::new("Jane", "Doe", vec![PromptReply::Choice(0)]);
    let resumed = run_session(
        &quiz,
        outcome.record,
        &mut resume_ui,
        &mut NullSink,
        &mut rng,
    )
    .unwrap();

    assert_eq!(resumed.completion, Completion::Finished);
    assert!(resumed.record.is_complete());
    assert_eq!(resume_ui.presented.len(), 1);
}
