use anyhow::*;
use directories_next::BaseDirs;
use std::path::PathBuf;

use crate::quiz;

const RESULTS_FILE_NAME: &str = "quiz_results.csv";

pub struct Settings {
    pub questions_path: PathBuf,
    pub results_path: PathBuf,
    pub quiz: quiz::Settings,
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quiz-trainer");
    Ok(dir)
}

pub fn default_results_path() -> Result<PathBuf> {
    let mut path = get_data_dir()?;
    path.push(RESULTS_FILE_NAME);
    Ok(path)
}

impl Settings {
    pub fn new(
        questions_path: PathBuf,
        results_path: Option<PathBuf>,
        quiz: quiz::Settings,
    ) -> Result<Settings> {
        let results_path = match results_path {
            Some(path) => path,
            None => default_results_path()?,
        };
        Ok(Settings {
            questions_path,
            results_path,
            quiz,
        })
    }
}
