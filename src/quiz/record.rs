use std::fmt;
use std::time::Duration;

use crate::quiz::definition::{AnswerLabel, Question};

pub const NO_ANSWER: &str = "No answer";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserAnswer {
    Label(AnswerLabel),
    NoAnswer,
}

impl From<Option<AnswerLabel>> for UserAnswer {
    fn from(label: Option<AnswerLabel>) -> Self {
        match label {
            Some(label) => UserAnswer::Label(label),
            None => UserAnswer::NoAnswer,
        }
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Label(label) => write!(f, "{}", label),
            UserAnswer::NoAnswer => f.write_str(NO_ANSWER),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerRecord {
    pub question_text: String,
    pub user_answer: UserAnswer,
    pub correct_answer_display: String,
    pub elapsed_seconds: Option<f64>,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &Question, answer: Option<AnswerLabel>, elapsed: Option<Duration>) -> Self {
        AnswerRecord {
            question_text: question.text.clone(),
            user_answer: answer.into(),
            correct_answer_display: question.answer_display(),
            elapsed_seconds: elapsed.map(|e| round_to_hundredths(e.as_secs_f64())),
            is_correct: answer.map_or(false, |label| question.is_correct(label)),
        }
    }
}

fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
