//! Scripted UI for testing session flows without a terminal.

use std::collections::VecDeque;
use std::io;

use quizrun_core::model::{Choice, Question};
use quizrun_core::traits::{PromptReply, QuizUi};

/// A `QuizUi` double that replays canned replies and records what it was
/// asked, so tests can drive a full session deterministically.
pub struct ScriptedUi {
    first_name: String,
    last_name: String,
    replies: VecDeque<PromptReply>,
    /// Ids of the questions presented, in presentation order.
    pub presented: Vec<i64>,
    /// Arguments of the last `show_final_results` call.
    pub final_results: Option<(String, usize, usize)>,
    /// Whether the resume screen was shown.
    pub resumed: bool,
}

impl ScriptedUi {
    /// Script that identifies as `first last` and plays `replies` in order.
    pub fn new(first_name: &str, last_name: &str, replies: Vec<PromptReply>) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            replies: replies.into(),
            presented: Vec::new(),
            final_results: None,
            resumed: false,
        }
    }

    /// Script that skips every question.
    pub fn silent(first_name: &str, last_name: &str) -> Self {
        Self::new(first_name, last_name, Vec::new())
    }
}

impl QuizUi for ScriptedUi {
    fn prompt_start_info(&mut self, _quiz_title: &str) -> io::Result<(String, String)> {
        Ok((self.first_name.clone(), self.last_name.clone()))
    }

    fn show_resume_summary(
        &mut self,
        _quiz_title: &str,
        _first_name: &str,
        _last_name: &str,
        _correct_count: usize,
        _total_count: usize,
    ) -> io::Result<()> {
        self.resumed = true;
        Ok(())
    }

    fn prompt_answer(
        &mut self,
        question: &Question,
        _choices: &[Choice],
        _index: usize,
        _total: usize,
    ) -> io::Result<PromptReply> {
        self.presented.push(question.id);
        Ok(self.replies.pop_front().unwrap_or(PromptReply::Skip))
    }

    fn show_final_results(
        &mut self,
        quiz_title: &str,
        correct_count: usize,
        total_count: usize,
    ) -> io::Result<()> {
        self.final_results = Some((quiz_title.to_string(), correct_count, total_count));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_skips() {
        let mut ui = ScriptedUi::new("Jane", "Doe", vec![PromptReply::Choice(0)]);
        let question = Question {
            id: 5,
            text: "Q".into(),
            choices: vec![Choice {
                label: "A".into(),
                is_correct: true,
            }],
        };
        let first = ui.prompt_answer(&question, &question.choices, 1, 2).unwrap();
        let second = ui.prompt_answer(&question, &question.choices, 2, 2).unwrap();

        assert_eq!(first, PromptReply::Choice(0));
        assert_eq!(second, PromptReply::Skip);
        assert_eq!(ui.presented, vec![5, 5]);
    }
}
