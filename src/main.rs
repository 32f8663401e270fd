use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::time::Duration;

mod console;
mod output;
mod quiz;
mod results;
mod settings;

use crate::output::console::ConsoleOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::{Mode, Session};
use crate::results::CsvResultLog;
use crate::settings::Settings;

/// Multiple-choice quiz trainer
#[derive(Parser, Debug)]
#[command(name = "quiz-trainer")]
#[command(author, version, about = "Run a multiple-choice quiz from a question sheet")]
struct Cli {
    /// CSV export of the question sheet
    /// (columns: Question, Answer, Answer Option A..D and an optional Hint)
    #[arg(value_name = "QUESTIONS")]
    questions: PathBuf,

    /// Quiz is timed and saved, practice goes through every question untimed
    #[arg(short, long, value_enum, default_value = "quiz")]
    mode: Mode,

    /// Where quiz results are appended (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    results: Option<PathBuf>,

    /// Number of questions asked in quiz mode
    #[arg(long, default_value_t = 20)]
    question_count: usize,

    /// Time budget for the whole quiz, in seconds
    #[arg(long, default_value_t = 1200)]
    time_limit: u64,
}

impl Cli {
    fn into_settings(self) -> Result<(Mode, Settings)> {
        ensure!(self.question_count > 0, "--question-count must be at least 1");
        let quiz_settings = quiz::Settings {
            question_count: self.question_count,
            time_budget: Duration::from_secs(self.time_limit),
            ..Default::default()
        };
        let settings = Settings::new(self.questions, self.results, quiz_settings)?;
        Ok((self.mode, settings))
    }
}

fn run() -> Result<()> {
    let (mode, settings) = Cli::parse().into_settings()?;

    let definition = QuizDefinition::open(&settings.questions_path)
        .with_context(|| format!("Error loading questions from {:?}", settings.questions_path))?;
    info!(
        "Loaded {} questions from {:?}",
        definition.get_questions().len(),
        settings.questions_path
    );

    let results_log = CsvResultLog::new(settings.results_path);
    info!("Quiz results will be saved to {:?}", results_log.get_path());

    let session = Session::new(
        definition.into_questions(),
        mode,
        settings.quiz,
        ConsoleOutput::new(),
        results_log,
    )?;
    let input = console::spawn_input_reader()?;
    console::run(session, input)
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
