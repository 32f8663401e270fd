use std::time::Duration;

use crate::quiz::record::AnswerRecord;
use crate::quiz::QuestionView;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerDetails(Vec<AnswerRecord>),
    Hint(String),
    PracticeFinished(usize),
    QuestionBegins(QuestionView),
    QuizCompleted(u32, usize),
    ResultsSaved,
    ResultsSaveFailed(String),
    SelectAnswer,
    SessionRestarted,
    TimeRemaining(Duration),
    TimeUp,
    TimeWarning(Duration),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}

pub fn format_clock(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
