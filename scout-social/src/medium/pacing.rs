//! Request pacing for the responses endpoint.
//!
//! Medium publishes no rate limits for these endpoints, so the collector pauses
//! after every post it processes. [`Pacer`] is the seam; [`FixedDelay`] is the
//! discipline shipped by default.
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

#[async_trait]
pub trait Pacer: Send + Sync {
    /// Called once after each request; returns when the next may start.
    async fn pause(&self);
}

/// Sleep for a fixed duration, every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tracing::trace!(target: "rate", delay_ms = self.0.as_millis() as u64, "pacing");
        if !self.0.is_zero() {
            sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_waits_the_full_duration() {
        let pacer = FixedDelay::from_millis(1500);
        let started = Instant::now();
        pacer.pause().await;
        pacer.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_returns_immediately() {
        let started = Instant::now();
        FixedDelay(Duration::ZERO).pause().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
