//! Polling for UI assertions.
//!
//! The DOM settles asynchronously after every click, so each assertion is
//! re-evaluated until it holds or the timeout elapses. On timeout the last
//! attempt's error is returned with the timeout attached as context.

use anyhow::Result;
use std::future::Future;
use tokio::time::{sleep, Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(4000);
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waiter {
    timeout: Duration,
    interval: Duration,
}

impl Default for Waiter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_INTERVAL)
    }
}

impl Waiter {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Same polling interval, different deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Run `attempt` until it returns `Ok`, sleeping `interval` between tries.
    ///
    /// The attempt always runs at least once, so a zero timeout behaves as a
    /// single immediate check.
    pub async fn retry<T, F, Fut>(&self, what: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let started = Instant::now();
        let mut tries = 0usize;
        loop {
            tries += 1;
            match attempt().await {
                Ok(value) => {
                    if tries > 1 {
                        log::debug!("✅ {what} held after {tries} attempts");
                    }
                    return Ok(value);
                }
                Err(err) if started.elapsed() >= self.timeout => {
                    return Err(err.context(format!(
                        "timed out after {:?} waiting for {what} ({tries} attempts)",
                        self.timeout
                    )));
                }
                Err(err) => {
                    log::debug!("⏳ Waiting for {what}: {err}");
                    sleep(self.interval).await;
                }
            }
        }
    }
}
