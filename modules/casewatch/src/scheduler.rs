use std::time::Duration;

use async_trait::async_trait;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::error::Result;

/// One unit of scheduled work.
#[async_trait]
pub trait Cycle: Send {
    async fn tick(&mut self) -> Result<()>;
}

/// Fixed-interval driver. Cycles are awaited in sequence, so a slow cycle
/// delays (and skips) later ticks instead of overlapping them.
pub struct Scheduler {
    period: Duration,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Run forever. The first cycle starts immediately.
    pub async fn run<C: Cycle>(&self, cycle: &mut C) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            interval_secs = self.period.as_secs(),
            "Scheduler started"
        );

        let mut count: u64 = 0;
        loop {
            interval.tick().await;
            count += 1;

            if let Err(e) = cycle.tick().await {
                warn!(cycle = count, error = %e, "Cycle failed");
            }
        }
    }
}
