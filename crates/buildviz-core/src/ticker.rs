//! Rotating stage counter driven by a periodic timer.
//!
//! The ticker is Armed from construction until `stop` is called; after that no
//! tick changes the stage. Hosts feed it either discrete `tick` calls from a
//! real timer or elapsed time through `advance`.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::DashboardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Armed,
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    state: TickerState,
    stage: usize,
    stage_count: usize,
    interval: Duration,
    pending: Duration,
}

impl Ticker {
    pub fn armed(config: &DashboardConfig) -> Self {
        Self {
            state: TickerState::Armed,
            stage: 0,
            stage_count: config.stage_count.max(1),
            interval: config.tick_interval(),
            pending: Duration::ZERO,
        }
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == TickerState::Armed
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One timer callback. Returns the stage after the tick.
    pub fn tick(&mut self) -> usize {
        if self.is_armed() {
            self.stage = (self.stage + 1) % self.stage_count;
            debug!(stage = self.stage, "ticker advanced");
        }
        self.stage
    }

    /// Feeds elapsed time and fires one tick per full interval. Returns the
    /// number of ticks fired.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_armed() || self.interval.is_zero() {
            return 0;
        }
        self.pending += elapsed;
        let mut fired = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            self.tick();
            fired += 1;
        }
        fired
    }

    /// Armed -> Stopped. Returns `true` only for the call that performed the
    /// transition.
    pub fn stop(&mut self) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.state = TickerState::Stopped;
        self.pending = Duration::ZERO;
        info!(stage = self.stage, "ticker stopped");
        true
    }
}
