//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrun_core::catalog;

pub fn execute(data_dir: Option<PathBuf>, quiz_name: String) -> Result<()> {
    let paths = super::resolve_paths(data_dir)?;
    let quiz = catalog::load_catalog(&paths, &quiz_name)?;

    println!("Quiz: {} ({} questions)", quiz.title, quiz.question_count());

    let mut table = Table::new();
    table.set_header(vec!["Position", "Id", "Choices", "Question"]);
    for (position, question) in quiz.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(question.id),
            Cell::new(question.choices.len()),
            Cell::new(truncate(&question.text, 48)),
        ]);
    }
    println!("{table}");

    let warnings = catalog::audit_quiz(&quiz);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max).collect();
        shortened.push_str("...");
        shortened
    }
}
