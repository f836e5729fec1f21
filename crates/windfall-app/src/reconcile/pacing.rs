//! Tick pacing aligned to wall-clock multiples of the period.

use std::time::Duration;

use tokio::time::Instant;

/// Longest step the simulation will take in one tick, in seconds.
const MAX_STEP: f32 = 1.0;

pub struct Pacer {
    period: Duration,
    origin: Instant,
    last: Instant,
}

impl Pacer {
    pub fn new(tick_rate: u32) -> Self {
        let now = Instant::now();
        Self {
            period: Duration::from_secs(1) / tick_rate.max(1),
            origin: now,
            last: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time from `now` to the next period boundary.
    pub fn delay_until_next(&self, now: Instant) -> Duration {
        let period = self.period.as_nanos();
        let into = now.saturating_duration_since(self.origin).as_nanos() % period;
        Duration::from_nanos((period - into) as u64)
    }

    /// Seconds since the previous tick, clamped to one period at least and
    /// `MAX_STEP` at most.
    pub fn step_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed.clamp(self.period.as_secs_f32(), MAX_STEP)
    }

    /// Sleep to the next boundary and return the step to simulate.
    pub async fn wait(&mut self) -> f32 {
        tokio::time::sleep(self.delay_until_next(Instant::now())).await;
        self.step_at(Instant::now())
    }
}
