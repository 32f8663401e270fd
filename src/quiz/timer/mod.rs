use std::time::Duration;

/// Shared liveness flag between a session and whatever drives its ticks.
pub use tokio_util::sync::CancellationToken;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tick {
    Running(Duration),
    Expired,
    Stopped,
}

#[derive(Debug)]
pub struct Countdown {
    time_remaining: Duration,
    expired: bool,
    token: CancellationToken,
}

impl Countdown {
    pub fn new(budget: Duration, token: CancellationToken) -> Self {
        Countdown {
            time_remaining: budget,
            expired: false,
            token,
        }
    }

    /// Reports `Expired` exactly once, every later tick is `Stopped`.
    pub fn tick(&mut self, dt: Duration) -> Tick {
        if self.expired || self.token.is_cancelled() {
            return Tick::Stopped;
        }
        self.time_remaining = self
            .time_remaining
            .checked_sub(dt)
            .unwrap_or_default();
        if self.time_remaining == Duration::default() {
            self.expired = true;
            return Tick::Expired;
        }
        Tick::Running(self.time_remaining)
    }

    pub fn get_time_remaining(&self) -> Duration {
        self.time_remaining
    }
}
