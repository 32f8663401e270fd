use std::cell::Cell;
use std::io::{self, Write};
use std::time::Duration;

use crate::output::{format_clock, Message, QuizOutput};
use crate::quiz::definition::AnswerLabel;

const DETAILS_SEPARATOR_WIDTH: usize = 60;

/// Renders session messages as plain text on standard output.
#[derive(Debug, Default)]
pub struct ConsoleOutput {
    time_remaining: Cell<Option<Duration>>,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Default::default()
    }

    fn interpret_message(&self, message: &Message) -> Option<String> {
        use Message::*;
        match message {
            QuestionBegins(question) => {
                let mut text = format!(
                    "\nQuestion {}/{}\nQ{}: {}",
                    question.number, question.total, question.number, question.text
                );
                for (label, option) in AnswerLabel::ALL.iter().zip(question.options.iter()) {
                    text += &format!("\n  {}) {}", label, option);
                }
                if let Some(remaining) = self.time_remaining.get() {
                    text += &format!("\nTime left: {}", format_clock(remaining));
                }
                text += "\nYour answer [a-d], h for a hint, t for status, r to restart, q to quit:";
                Some(text)
            }
            TimeRemaining(remaining) => {
                self.time_remaining.set(Some(*remaining));
                None
            }
            TimeWarning(remaining) => Some(format!("Only {} left!", format_clock(*remaining))),
            TimeUp => Some("Time's up! The current question was submitted without an answer.".into()),
            SelectAnswer => Some("Please select an answer!".into()),
            Hint(hint) => Some(format!("Hint: {}", hint)),
            SessionRestarted => {
                self.time_remaining.set(None);
                Some("The quiz was restarted.".into())
            }
            QuizCompleted(score, total) => Some(format!(
                "\nQuiz completed! Your score is: {}/{}\nType s for answer details, r to restart, q to quit.",
                score, total
            )),
            PracticeFinished(total) => Some(format!(
                "\nPractice finished, you went through all {} questions.\nType s for answer details, r to restart, q to quit.",
                total
            )),
            ResultsSaved => Some("Your quiz results have been saved!".into()),
            ResultsSaveFailed(reason) => Some(format!("Could not save your quiz results: {}", reason)),
            AnswerDetails(records) => {
                let mut text = "Answer details:".to_owned();
                for record in records {
                    text += &format!(
                        "\n{}\nYour Answer: {}\nCorrect Answer: {}",
                        record.question_text, record.user_answer, record.correct_answer_display
                    );
                    if let Some(seconds) = record.elapsed_seconds {
                        text += &format!("\nTime Taken: {}s", seconds);
                    }
                    text += &format!("\n{}", "-".repeat(DETAILS_SEPARATOR_WIDTH));
                }
                Some(text)
            }
        }
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        if let Some(text) = self.interpret_message(message) {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = writeln!(handle, "{}", text).and_then(|_| handle.flush()) {
                log::warn!("Could not write to console: {}", e);
            }
        }
    }
}
