#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Mode {
    /// Timed run over a random sample of the questions, results are saved
    Quiz,
    /// Untimed run over every question in file order, nothing is saved
    Practice,
}

/// What a session is allowed to do, decided once from its mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModePolicy {
    pub samples_questions: bool,
    pub has_timer: bool,
    pub records_answer_times: bool,
    pub announces_score: bool,
    pub persists_results: bool,
}

impl ModePolicy {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Quiz => ModePolicy {
                samples_questions: true,
                has_timer: true,
                records_answer_times: true,
                announces_score: true,
                persists_results: true,
            },
            Mode::Practice => ModePolicy {
                samples_questions: false,
                has_timer: false,
                records_answer_times: false,
                announces_score: false,
                persists_results: false,
            },
        }
    }
}
