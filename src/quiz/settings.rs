use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_count: usize,
    pub time_budget: Duration,
    pub time_warnings: Vec<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_count: 20,
            time_budget: Duration::from_secs(1200),
            time_warnings: vec![
                Duration::from_secs(60),
                Duration::from_secs(30),
                Duration::from_secs(10),
            ],
        }
    }
}
