//! quizrun-term — console implementation of the core `QuizUi` trait.
//!
//! Owns every terminal interaction of a session: screen clearing, banner
//! titles, numbered choice rendering, and the retrying numeric answer
//! prompt. Interruption (Ctrl-C flag, `ErrorKind::Interrupted`, stdin EOF)
//! is surfaced as data so the engine can stop cleanly and the caller can
//! persist partial progress.

pub mod mock;

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use quizrun_core::model::{Choice, Question};
use quizrun_core::traits::{PromptReply, QuizUi};

/// Console UI over arbitrary input/output streams.
///
/// Production code uses [`ConsoleUi::stdio`]; tests feed a `Cursor` and
/// capture a `Vec<u8>`.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    interrupted: Arc<AtomicBool>,
}

impl ConsoleUi<io::BufReader<io::Stdin>, io::Stdout> {
    /// Console UI bound to the process stdin/stdout. `interrupted` is the
    /// flag raised by the Ctrl-C handler.
    pub fn stdio(interrupted: Arc<AtomicBool>) -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout(), interrupted)
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            input,
            output,
            interrupted,
        }
    }

    /// Read one trimmed line. `None` means the session was interrupted
    /// (Ctrl-C flag, interrupted syscall, or end of input).
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(None);
        }
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("end of input, treating as interruption");
                Ok(None)
            }
            Ok(_) => {
                if self.interrupted.load(Ordering::SeqCst) {
                    return Ok(None);
                }
                Ok(Some(line.trim().to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                tracing::debug!("read interrupted by signal");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        write!(self.output, "\x1B[2J\x1B[1;1H")
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(70))?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{}", "=".repeat(70))
    }

    fn print_question(
        &mut self,
        question: &Question,
        choices: &[Choice],
        index: usize,
        total: usize,
    ) -> io::Result<()> {
        self.clear_screen()?;
        writeln!(self.output, "{index} / {total} - {}\n", question.text)?;
        for (number, choice) in choices.iter().enumerate() {
            let mut lines = choice.label.lines();
            let first = lines.next().unwrap_or("");
            writeln!(self.output, "\t{} : {first}", number + 1)?;
            // Multi-line labels (code snippets) keep their indentation
            for line in lines {
                writeln!(self.output, "\t    {line}")?;
            }
        }
        Ok(())
    }
}

/// Interpret one line typed at the answer prompt.
///
/// Empty input skips the question. On invalid input, returns the warning to
/// print before re-prompting.
fn parse_reply(line: &str, choice_count: usize) -> Result<PromptReply, String> {
    if line.is_empty() {
        return Ok(PromptReply::Skip);
    }
    match line.parse::<usize>() {
        Ok(value) if (1..=choice_count).contains(&value) => Ok(PromptReply::Choice(value - 1)),
        Ok(_) => Err(format!("The number must be between 1 and {choice_count}")),
        Err(_) => Err(format!(
            "Please enter a valid number between 1 and {choice_count}"
        )),
    }
}

impl<R: BufRead, W: Write> QuizUi for ConsoleUi<R, W> {
    fn prompt_start_info(&mut self, quiz_title: &str) -> io::Result<(String, String)> {
        self.banner(&format!("  Welcome to {quiz_title}"))?;

        write!(self.output, "Enter your last name: ")?;
        let Some(last_name) = self.read_line()? else {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        };
        write!(self.output, "Enter your first name: ")?;
        let Some(first_name) = self.read_line()? else {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        };

        write!(self.output, "\nPress Enter to begin...")?;
        if self.read_line()?.is_none() {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }

        Ok((first_name, last_name))
    }

    fn show_resume_summary(
        &mut self,
        quiz_title: &str,
        first_name: &str,
        last_name: &str,
        correct_count: usize,
        total_count: usize,
    ) -> io::Result<()> {
        self.banner(&format!("  Resuming {quiz_title}"))?;
        writeln!(self.output, "User: {first_name} {last_name}")?;
        writeln!(self.output, "\nCurrent score: {correct_count} / {total_count}")?;
        write!(self.output, "\nPress Enter to continue...")?;
        if self.read_line()?.is_none() {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }
        Ok(())
    }

    fn prompt_answer(
        &mut self,
        question: &Question,
        choices: &[Choice],
        index: usize,
        total: usize,
    ) -> io::Result<PromptReply> {
        self.print_question(question, choices, index, total)?;

        loop {
            write!(self.output, "\nEnter your choice (press Enter to skip): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(PromptReply::Interrupted);
            };
            match parse_reply(&line, choices.len()) {
                Ok(reply) => return Ok(reply),
                Err(warning) => writeln!(self.output, "{warning}")?,
            }
        }
    }

    fn show_final_results(
        &mut self,
        quiz_title: &str,
        correct_count: usize,
        total_count: usize,
    ) -> io::Result<()> {
        self.clear_screen()?;
        self.banner(&format!("  Results for {quiz_title}"))?;
        writeln!(self.output, "Score: {correct_count}/{total_count}")?;
        self.output.flush()
    }
}
