//! Restarts the serve loop when it fails, backing off exponentially and
//! giving up after a bounded number of consecutive failures.

use std::{future::Future, time::Duration};

const MAX_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
pub struct RestartPolicy {
    pub max_restarts: u32,
    pub base_backoff: Duration,
}

impl RestartPolicy {
    /// Delay before restart number `attempt` (1-based): `base * 2^(attempt-1)`,
    /// capped at one minute.
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_backoff
            .checked_mul(factor)
            .map_or(MAX_BACKOFF, |delay| delay.min(MAX_BACKOFF))
    }
}

/// Runs `serve` until it returns `Ok`, restarting it on error according to
/// `policy`. The last error is returned once the restart budget is spent.
pub async fn supervise<F, Fut, E>(policy: RestartPolicy, mut serve: F) -> Result<(), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match serve().await {
            Ok(()) => return Ok(()),
            Err(err) => {
                attempt += 1;
                tracing::error!("bot stopped with an error: {err}");
                if attempt > policy.max_restarts {
                    tracing::error!("giving up after {} restarts", policy.max_restarts);
                    return Err(err);
                }

                let delay = policy.delay(attempt);
                tracing::warn!(
                    "restarting in {}s (attempt {attempt}/{})",
                    delay.as_secs_f32(),
                    policy.max_restarts
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
