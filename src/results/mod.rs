use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::quiz::record::AnswerRecord;

#[cfg(test)]
pub mod mock;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not open results log: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write results log: {0}")]
    Csv(#[from] csv::Error),
}

pub trait ResultLog {
    /// Appends every record of a finished quiz in one go.
    fn append(&mut self, records: &[AnswerRecord]) -> Result<(), LogError>;
}

/// One line of the results log. Column order is the file format.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct LogRow {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub time_taken: Option<f64>,
}

impl From<&AnswerRecord> for LogRow {
    fn from(record: &AnswerRecord) -> Self {
        LogRow {
            question: record.question_text.clone(),
            user_answer: record.user_answer.to_string(),
            correct_answer: record.correct_answer_display.clone(),
            time_taken: record.elapsed_seconds,
        }
    }
}

#[derive(Debug)]
pub struct CsvResultLog {
    path: PathBuf,
}

impl CsvResultLog {
    pub fn new(path: PathBuf) -> Self {
        CsvResultLog { path }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }
}

impl ResultLog for CsvResultLog {
    fn append(&mut self, records: &[AnswerRecord]) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_new_log = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new_log)
            .from_writer(file);
        for record in records {
            writer.serialize(LogRow::from(record))?;
        }
        writer.flush()?;

        log::info!("Appended {} answers to {:?}", records.len(), self.path);
        Ok(())
    }
}
