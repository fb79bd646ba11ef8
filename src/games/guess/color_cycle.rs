//! Ownership token for the victory color cycle.
//!
//! The handle lives inside the `Won` phase and nowhere else. Dropping it
//! cancels the cycle: no tick can be observed once the owner is gone.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, instrument, trace};

/// Repeating cosmetic timer active while a session is won.
#[derive(Debug)]
pub struct ColorCycle {
    period: Duration,
    interval: Option<Interval>,
    ticks: u64,
}

impl ColorCycle {
    /// Acquires a new cycle with the given period.
    ///
    /// The underlying interval is armed on first poll, so a cycle can be
    /// created outside a runtime.
    #[instrument]
    pub fn start(period: Duration) -> Self {
        debug!("Color cycle started");
        Self {
            period,
            interval: None,
            ticks: 0,
        }
    }

    /// Period between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Waits for the next tick. The first tick arrives one period after arming.
    ///
    /// Cancel safe: dropping the future before completion loses no tick.
    pub async fn tick(&mut self) {
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;
        self.ticks += 1;
        trace!(ticks = self.ticks, "Color cycle tick");
    }
}

impl Drop for ColorCycle {
    fn drop(&mut self) {
        debug!(ticks = self.ticks, "Color cycle cancelled");
    }
}
