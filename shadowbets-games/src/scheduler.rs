use async_trait::async_trait;
use std::time::Duration;

/// Runs the presentational pauses between engine steps.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn defer(&self, delay: Duration);
}

/// Real wall-clock pauses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn defer(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Skips every pause; used by tests and `--fast`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn defer(&self, _delay: Duration) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_scheduler_waits() {
        let start = Instant::now();
        TokioScheduler.defer(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_immediate_scheduler_returns_at_once() {
        let start = Instant::now();
        ImmediateScheduler.defer(Duration::from_secs(30)).await;
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
