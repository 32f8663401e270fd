use csv::StringRecord;
use log::debug;
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub mod question;

pub use question::{AnswerLabel, Question, RawQuestion};


pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Question",
    "Answer",
    "Answer Option A",
    "Answer Option B",
    "Answer Option C",
    "Answer Option D",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse question file: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing one or more required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("invalid question on row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("question file does not contain any question")]
    Empty,
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, LoadError> {
        let file = File::open(source)?;
        QuizDefinition::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition, LoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers: StringRecord = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        debug!("Column names in question file: {:?}", headers);

        let missing_columns: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing_columns.is_empty() {
            return Err(LoadError::MissingColumns(missing_columns));
        }
        csv_reader.set_headers(headers);

        let mut questions = Vec::new();
        for (index, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion = question?;
            let question = Question::try_from(raw_question).map_err(|reason| {
                LoadError::InvalidRow {
                    row: index + 1,
                    reason,
                }
            })?;
            questions.push(question);
        }

        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
