//! Fixed-cadence pacing for scan requests
//!
//! The pacer bounds how often requests are issued; the adaptive page limit
//! bounds what each one costs.

use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Waits for the next tick before each scan request
///
/// A zero period never waits. The first tick completes immediately.
pub struct Pacer {
    interval: Option<Interval>,
}

impl Pacer {
    /// Create a pacer; must be called from within a tokio runtime when
    /// `period` is non-zero
    pub fn new(period: Duration) -> Self {
        if period.is_zero() {
            return Self { interval: None };
        }

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval: Some(ticker),
        }
    }

    /// Wait until the next tick
    pub async fn wait(&mut self) {
        if let Some(ticker) = self.interval.as_mut() {
            ticker.tick().await;
        }
    }
}
