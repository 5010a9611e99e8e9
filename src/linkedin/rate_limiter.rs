use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

pub struct RateLimiter {
    state: Arc<Mutex<RateLimitState>>,
    requests_per_minute: u32,
}

struct RateLimitState {
    requests_this_minute: u32,
    minute_start: Instant,
}

impl RateLimiter {
    /// `requests_per_minute == 0` disables pacing.
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimitState {
                requests_this_minute: 0,
                minute_start: Instant::now(),
            })),
            requests_per_minute,
        }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    pub async fn wait(&self) {
        if self.requests_per_minute == 0 {
            return;
        }

        let mut state = self.state.lock().await;

        let minute_elapsed = state.minute_start.elapsed();
        if minute_elapsed < Duration::from_secs(60) {
            if state.requests_this_minute >= self.requests_per_minute {
                let wait_time = Duration::from_secs(60) - minute_elapsed;
                tracing::debug!("Soft rate limiting, waiting {:?}", wait_time);
                sleep(wait_time).await;
                state.requests_this_minute = 0;
                state.minute_start = Instant::now();
            }
        } else {
            state.requests_this_minute = 0;
            state.minute_start = Instant::now();
        }

        state.requests_this_minute += 1;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(60)
    }
}
