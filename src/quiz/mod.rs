use log::{debug, error, info};
use rand::seq::SliceRandom;
use std::time::Duration;
use thiserror::Error;

use self::definition::*;
use self::record::AnswerRecord;
use self::timer::{CancellationToken, Countdown, Tick};
use crate::output::{Message, QuizOutput};
use crate::results::ResultLog;

pub mod definition;
mod mode;
pub mod record;
mod settings;
pub mod timer;

pub use self::mode::{Mode, ModePolicy};
pub use self::settings::Settings;


#[derive(Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    #[error("there are no questions to ask")]
    NoQuestions,
    #[error("please select an answer")]
    NoSelection,
    #[error("the quiz is already completed")]
    Completed,
    #[error("the quiz was closed")]
    Closed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    AwaitingAnswer(usize),
    Completed,
}

/// What the presentation layer needs to display the current question.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: [String; 4],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubmitOutcome {
    pub is_correct: bool,
    pub is_completed: bool,
}

pub struct Session<O: QuizOutput, L: ResultLog> {
    mode: Mode,
    policy: ModePolicy,
    settings: Settings,
    pool: Vec<Question>,
    questions: Vec<Question>,
    phase: Phase,
    score: u32,
    answer_log: Vec<AnswerRecord>,
    time_on_question: Duration,
    countdown: Option<Countdown>,
    token: CancellationToken,
    output: O,
    results_log: L,
}

impl<O: QuizOutput, L: ResultLog> Session<O, L> {
    pub fn new(
        pool: Vec<Question>,
        mode: Mode,
        settings: Settings,
        output: O,
        results_log: L,
    ) -> Result<Self, SessionError> {
        if pool.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let policy = ModePolicy::for_mode(mode);
        let mut session = Session {
            mode,
            policy,
            settings,
            pool,
            questions: Vec::new(),
            phase: Phase::AwaitingAnswer(0),
            score: 0,
            answer_log: Vec::new(),
            time_on_question: Duration::default(),
            countdown: None,
            token: CancellationToken::new(),
            output,
            results_log,
        };
        session.begin()?;
        info!(
            "Starting {:?} session with {} of {} questions",
            mode,
            session.questions.len(),
            session.pool.len()
        );
        Ok(session)
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        let questions = self.select_questions();
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        self.questions = questions;
        self.phase = Phase::AwaitingAnswer(0);
        self.score = 0;
        self.answer_log.clear();
        self.time_on_question = Duration::default();
        self.countdown = if self.policy.has_timer {
            self.output
                .say(&Message::TimeRemaining(self.settings.time_budget));
            Some(Countdown::new(self.settings.time_budget, self.token.clone()))
        } else {
            None
        };
        self.announce_question();
        Ok(())
    }

    fn select_questions(&self) -> Vec<Question> {
        if !self.policy.samples_questions {
            return self.pool.clone();
        }
        let mut rng = rand::thread_rng();
        let amount = self.settings.question_count.min(self.pool.len());
        let mut questions: Vec<Question> = self
            .pool
            .choose_multiple(&mut rng, amount)
            .cloned()
            .collect();
        questions.shuffle(&mut rng);
        questions
    }

    fn announce_question(&self) {
        if let Some(view) = self.current_question() {
            self.output.say(&Message::QuestionBegins(view));
        }
    }

    /// Submits the user's choice for the current question. A missing choice is rejected.
    pub fn submit(&mut self, label: Option<AnswerLabel>) -> Result<SubmitOutcome, SessionError> {
        if self.token.is_cancelled() {
            return Err(SessionError::Closed);
        }
        if self.phase == Phase::Completed {
            return Err(SessionError::Completed);
        }
        match label {
            Some(label) => self.record_answer(Some(label)),
            None => {
                self.output.say(&Message::SelectAnswer);
                Err(SessionError::NoSelection)
            }
        }
    }

    fn record_answer(&mut self, label: Option<AnswerLabel>) -> Result<SubmitOutcome, SessionError> {
        let index = match self.phase {
            Phase::AwaitingAnswer(index) => index,
            Phase::Completed => return Err(SessionError::Completed),
        };

        let elapsed = if self.policy.records_answer_times {
            Some(self.time_on_question)
        } else {
            None
        };
        let record = AnswerRecord::new(&self.questions[index], label, elapsed);
        let is_correct = record.is_correct;
        if is_correct {
            self.score += 1;
        }
        debug!(
            "Question {} answered with {} (correct: {})",
            index + 1,
            record.user_answer,
            is_correct
        );
        self.answer_log.push(record);
        self.time_on_question = Duration::default();

        let next_index = index + 1;
        let is_completed = next_index >= self.questions.len();
        if is_completed {
            self.complete();
        } else {
            self.phase = Phase::AwaitingAnswer(next_index);
            self.announce_question();
        }

        Ok(SubmitOutcome {
            is_correct,
            is_completed,
        })
    }

    fn complete(&mut self) {
        self.phase = Phase::Completed;
        self.countdown = None;
        info!(
            "{:?} session completed with a score of {}/{}",
            self.mode,
            self.score,
            self.questions.len()
        );

        if self.policy.announces_score {
            self.output
                .say(&Message::QuizCompleted(self.score, self.questions.len()));
        } else {
            self.output
                .say(&Message::PracticeFinished(self.questions.len()));
        }

        if self.policy.persists_results {
            match self.results_log.append(&self.answer_log) {
                Ok(()) => self.output.say(&Message::ResultsSaved),
                Err(e) => {
                    error!("Could not save quiz results: {}", e);
                    self.output.say(&Message::ResultsSaveFailed(e.to_string()));
                }
            }
        }
    }

    /// Advances the clock. When the countdown runs out, the current question is submitted unanswered.
    pub fn tick(&mut self, dt: Duration) {
        if self.token.is_cancelled() || self.phase == Phase::Completed {
            return;
        }
        if self.policy.records_answer_times {
            self.time_on_question += dt;
        }

        let countdown = match self.countdown.as_mut() {
            Some(countdown) => countdown,
            None => return,
        };
        let time_remaining_before = countdown.get_time_remaining();
        match countdown.tick(dt) {
            Tick::Running(time_remaining) => {
                self.output.say(&Message::TimeRemaining(time_remaining));
                self.announce_time_warning(time_remaining_before, time_remaining);
            }
            Tick::Expired => {
                info!("Time is up, submitting the current question without an answer");
                self.output.say(&Message::TimeRemaining(Duration::default()));
                self.output.say(&Message::TimeUp);
                if let Err(e) = self.record_answer(None) {
                    debug!("Forced submission skipped: {}", e);
                }
            }
            Tick::Stopped => (),
        }
    }

    fn announce_time_warning(&self, before: Duration, after: Duration) {
        let crossed = self
            .settings
            .time_warnings
            .iter()
            .filter(|threshold| before > **threshold && after <= **threshold)
            .min();
        if let Some(threshold) = crossed {
            self.output.say(&Message::TimeWarning(*threshold));
        }
    }

    /// Starts over with a fresh set of questions and a full countdown.
    pub fn restart(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        info!("Restarting {:?} session", self.mode);
        self.output.say(&Message::SessionRestarted);
        if let Err(e) = self.begin() {
            error!("Could not restart {:?} session: {}", self.mode, e);
        }
    }

    pub fn request_hint(&self) -> Option<&str> {
        let question = match self.phase {
            Phase::AwaitingAnswer(index) => &self.questions[index],
            Phase::Completed => return None,
        };
        self.output.say(&Message::Hint(question.hint.clone()));
        Some(question.hint.as_str())
    }

    pub fn show_answer_details(&self) {
        self.output
            .say(&Message::AnswerDetails(self.answer_log.clone()));
    }

    /// Stops the countdown for good. No transition happens after this.
    pub fn close(&mut self) {
        self.token.cancel();
        self.countdown = None;
    }

    pub fn current_question(&self) -> Option<QuestionView> {
        match self.phase {
            Phase::AwaitingAnswer(index) => {
                let question = &self.questions[index];
                Some(QuestionView {
                    number: index + 1,
                    total: self.questions.len(),
                    text: question.text.clone(),
                    options: question.options.clone(),
                })
            }
            Phase::Completed => None,
        }
    }

    pub fn get_score(&self) -> u32 {
        self.score
    }

    pub fn get_total(&self) -> usize {
        self.questions.len()
    }

    pub fn get_time_remaining(&self) -> Option<Duration> {
        self.countdown.as_ref().map(|c| c.get_time_remaining())
    }

    pub fn get_answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl<O: QuizOutput, L: ResultLog> Drop for Session<O, L> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
