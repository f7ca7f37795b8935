//! The `quizrun init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizrun.toml").exists() {
        println!("quizrun.toml already exists, skipping.");
    } else {
        std::fs::write("quizrun.toml", SAMPLE_CONFIG)?;
        println!("Created quizrun.toml");
    }

    std::fs::create_dir_all("quiz")?;
    std::fs::create_dir_all("results")?;
    let example_path = std::path::Path::new("quiz/example.json");
    if example_path.exists() {
        println!("quiz/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quiz/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizrun validate --quiz example");
    println!("  2. Run: quizrun run --quiz example --output mytry");
    println!("  3. Resume later: quizrun run --quiz example --output mytry --resume");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

# Root directory holding the quiz and results subdirectories.
data_dir = "."

# Subdirectory names, relative to data_dir.
quiz_dir = "quiz"
results_dir = "results"
"#;

const EXAMPLE_QUIZ: &str = r#"{
  "quiz_title": "Example Quiz",
  "questions": [
    {
      "id": 1,
      "question": "Which planet is known as the red planet?",
      "choices": ["Venus", "Mars", "Jupiter"],
      "answer_index": 1
    },
    {
      "id": 2,
      "question": "What is 6 x 7?",
      "choices": ["42", "36", "48", "54"],
      "answer_index": 0
    },
    {
      "id": 3,
      "question": "Which keyword declares an immutable binding in Rust?",
      "choices": ["var", "let", "mut"],
      "answer_index": 1
    }
  ]
}
"#;
