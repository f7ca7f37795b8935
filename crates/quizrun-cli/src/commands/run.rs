//! The `quizrun run` command.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use quizrun_core::catalog;
use quizrun_core::config::DataPaths;
use quizrun_core::engine::{run_session, Completion};
use quizrun_core::error::ResultError;
use quizrun_core::record::{self, ResultRecord};
use quizrun_core::traits::{ProgressSink, QuizUi};
use quizrun_term::ConsoleUi;

use crate::EXIT_INTERRUPTED;

/// Persists every accepted answer, so an interruption can never lose more
/// than the question currently being asked.
struct DiskSink {
    paths: DataPaths,
    output: String,
}

impl ProgressSink for DiskSink {
    fn record_updated(&mut self, record: &ResultRecord) -> Result<(), ResultError> {
        record::save_record(record, &self.paths, &self.output)
    }
}

pub fn execute(
    data_dir: Option<PathBuf>,
    quiz_name: String,
    output: String,
    resume: bool,
) -> Result<i32> {
    let paths = super::resolve_paths(data_dir)?;
    let quiz = catalog::load_catalog(&paths, &quiz_name)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
    }
    let mut ui = ConsoleUi::stdio(Arc::clone(&interrupted));

    let record = if resume {
        let record = record::load_record(&paths, &output)?;
        if record.quiz_name != quiz.name {
            tracing::warn!(
                expected = %quiz.name,
                found = %record.quiz_name,
                "result file belongs to another quiz"
            );
        }
        let shown = ui.show_resume_summary(
            &quiz.title,
            &record.first_name,
            &record.last_name,
            record.correct_count,
            quiz.question_count(),
        );
        match shown {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(EXIT_INTERRUPTED),
            other => other?,
        }
        record
    } else {
        let (first_name, last_name) = match ui.prompt_start_info(&quiz.title) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(EXIT_INTERRUPTED),
            other => other?,
        };
        let record = ResultRecord::fresh(&quiz.name, &quiz.question_ids(), first_name, last_name);
        record::save_record(&record, &paths, &output)?;
        record
    };

    let mut sink = DiskSink {
        paths: paths.clone(),
        output: output.clone(),
    };
    let mut rng = rand::rng();
    let outcome = run_session(&quiz, record, &mut ui, &mut sink, &mut rng)?;

    // The record held here is exactly the state after the last processed
    // answer, on every completion path including interruption.
    record::save_record(&outcome.record, &paths, &output)?;

    match outcome.completion {
        Completion::AllAnswered => println!("All questions already answered correctly."),
        Completion::Interrupted => println!("\nQuiz interrupted."),
        Completion::Finished => {}
    }

    ui.show_final_results(&quiz.title, outcome.record.correct_count, quiz.question_count())?;

    Ok(match outcome.completion {
        Completion::Interrupted => EXIT_INTERRUPTED,
        Completion::AllAnswered | Completion::Finished => 0,
    })
}
