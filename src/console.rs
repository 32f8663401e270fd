use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::output::{format_clock, QuizOutput};
use crate::quiz::definition::AnswerLabel;
use crate::quiz::{Session, SessionError};
use crate::results::ResultLog;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Answer(Option<AnswerLabel>),
    Hint,
    Restart,
    Details,
    Status,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Answer(None);
        }
        if let Some(label) = AnswerLabel::parse(line) {
            return Command::Answer(Some(label));
        }
        match line.to_lowercase().as_ref() {
            "h" | "hint" => Command::Hint,
            "r" | "restart" => Command::Restart,
            "s" | "details" => Command::Details,
            "t" | "status" => Command::Status,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

pub fn spawn_input_reader() -> Result<Receiver<String>> {
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_owned())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Could not read from standard input: {}", e);
                        break;
                    }
                }
            }
        })
        .context("Could not spawn standard input reader")?;
    Ok(receiver)
}

/// Drives a session from lines of input until the user quits or input ends.
/// Every transition runs on the calling thread.
pub fn run<O: QuizOutput, L: ResultLog>(
    mut session: Session<O, L>,
    input: Receiver<String>,
) -> Result<()> {
    let token = session.cancellation_token();
    let mut last_tick = Instant::now();

    loop {
        let event = input.recv_timeout(TICK_INTERVAL);
        if token.is_cancelled() {
            break;
        }

        let now = Instant::now();
        session.tick(now.duration_since(last_tick));
        last_tick = now;

        let line = match event {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                debug!("Standard input closed");
                break;
            }
        };

        match Command::parse(&line) {
            Command::Answer(label) => match session.submit(label) {
                Ok(outcome) => debug!(
                    "Answer submitted (correct: {}, completed: {})",
                    outcome.is_correct, outcome.is_completed
                ),
                Err(SessionError::NoSelection) => (),
                Err(SessionError::Completed) => {
                    println!("The quiz is over, type r to restart or q to quit.")
                }
                Err(SessionError::Closed) | Err(SessionError::NoQuestions) => break,
            },
            Command::Hint => {
                if session.is_completed() {
                    println!("The quiz is over, there is no question to give a hint for.");
                } else {
                    session.request_hint();
                }
            }
            Command::Restart => session.restart(),
            Command::Details => session.show_answer_details(),
            Command::Status => println!("{}", describe_status(&session)),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command: {}", input),
        }
    }

    info!(
        "Leaving {:?} session with a score of {}/{} ({} answers recorded)",
        session.get_mode(),
        session.get_score(),
        session.get_total(),
        session.get_answer_log().len()
    );
    session.close();
    Ok(())
}

fn describe_status<O: QuizOutput, L: ResultLog>(session: &Session<O, L>) -> String {
    let mut status = match session.current_question() {
        Some(question) => format!("Question {}/{}", question.number, question.total),
        None => "Completed".to_owned(),
    };
    status += &format!(", score {}/{}", session.get_score(), session.get_total());
    if let Some(remaining) = session.get_time_remaining() {
        status += &format!(", time left {}", format_clock(remaining));
    }
    status
}
